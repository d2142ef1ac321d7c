use std::sync::Arc;

use crate::domain::ports::inbound::ProjectService;

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectService>,
}

impl AppState {
    pub fn new(project_service: Arc<dyn ProjectService>) -> Self {
        Self { project_service }
    }
}
