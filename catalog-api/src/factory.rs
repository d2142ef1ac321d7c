//! Composition root: the only place that wires concrete adapters into services.

use std::sync::Arc;

use crate::{
    adapters::outbound::{CatalogLoadError, CatalogPaths, JsonProjectRepository},
    app_state::AppState,
    domain::{ports::inbound::ProjectService, services::ProjectServiceImpl},
};

/// Load the catalog from disk and build the shared application state.
pub async fn build_app_state(paths: &CatalogPaths) -> Result<AppState, CatalogLoadError> {
    let repository = JsonProjectRepository::load(paths).await?;
    Ok(app_state_from_repository(repository))
}

/// Build the application state around an already loaded repository.
pub fn app_state_from_repository(repository: JsonProjectRepository) -> AppState {
    let service: Arc<dyn ProjectService> = Arc::new(ProjectServiceImpl::new(Arc::new(repository)));
    AppState::new(service)
}
