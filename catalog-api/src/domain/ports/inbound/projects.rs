use async_trait::async_trait;

use crate::domain::{
    models::{FilterOptions, Project, ProjectFilters, ProjectId},
    ProjectError,
};

/// Inbound port for catalog queries.
///
/// This trait defines the use cases that HTTP handlers can invoke.
#[async_trait]
pub trait ProjectService: Send + Sync + 'static {
    /// List projects, optionally filtered and sorted.
    async fn list_projects(&self, filters: Option<&ProjectFilters>) -> Vec<Project>;

    /// Get a single project, failing with `ProjectError::NotFound` when absent.
    async fn get_project(&self, id: ProjectId) -> Result<Project, ProjectError>;

    /// Reference tables used to populate filter pickers.
    async fn get_filter_options(&self) -> FilterOptions;

    /// Number of projects held by the catalog.
    async fn project_count(&self) -> usize;
}
