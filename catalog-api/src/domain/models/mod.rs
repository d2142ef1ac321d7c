mod filters;
mod ids;
mod project;
mod reference;

pub use filters::*;
pub use ids::*;
pub use project::*;
pub use reference::*;
