use thiserror::Error;

use super::models::ProjectId;

/// Errors that can occur during catalog queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project with ID {0} not found")]
    NotFound(ProjectId),
}
