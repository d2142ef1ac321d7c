use async_trait::async_trait;

use crate::domain::models::{Project, ProjectFilters, ProjectId, ReferenceData};

/// Outbound port for project storage.
///
/// Implementations hold an immutable, fully denormalized catalog; none of the
/// operations can fail once the repository has been constructed.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// All projects passing `filters`, in the order the filters request.
    async fn find_all(&self, filters: Option<&ProjectFilters>) -> Vec<Project>;

    async fn find_by_id(&self, id: ProjectId) -> Option<Project>;

    /// The lookup tables the catalog was resolved against.
    async fn reference_data(&self) -> ReferenceData;
}
