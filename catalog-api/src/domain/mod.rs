mod error;
pub mod models;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::*;
