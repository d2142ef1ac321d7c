use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{FilterOptions, Project, ProjectFilters, ProjectId},
    ports::{inbound::ProjectService, outbound::ProjectRepository},
    ProjectError,
};

/// Implementation of the ProjectService inbound port.
///
/// Forwards listing to the repository and turns a missing project into
/// `ProjectError::NotFound`.
pub struct ProjectServiceImpl<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProjectRepository> ProjectService for ProjectServiceImpl<R> {
    async fn list_projects(&self, filters: Option<&ProjectFilters>) -> Vec<Project> {
        self.repository.find_all(filters).await
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, ProjectError> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or(ProjectError::NotFound(id))
    }

    async fn get_filter_options(&self) -> FilterOptions {
        self.repository.reference_data().await.into()
    }

    async fn project_count(&self) -> usize {
        self.repository.find_all(None).await.len()
    }
}
