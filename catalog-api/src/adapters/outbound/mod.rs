pub mod json;

pub use json::{CatalogLoadError, CatalogPaths, JsonProjectRepository};
