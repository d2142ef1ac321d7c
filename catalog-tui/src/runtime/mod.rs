mod action_queue;
mod actions;
mod event_loop;
mod views;

pub(crate) use actions::{load_filter_options, load_projects};
pub use event_loop::run_app;
