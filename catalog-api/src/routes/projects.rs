use std::str::FromStr;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::models::{
        FilterOptions, Project, ProjectFilters, ProjectId, ReferenceId, SortOrder,
    },
};

use super::ApiError;

const INVALID_ID_MESSAGE: &str = "Validation failed (numeric string is expected)";

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub industry: Option<String>,
    pub skills: Option<String>,
    pub specialties: Option<String>,
    pub sort_by: Option<String>,
}

impl ListProjectsQuery {
    pub fn to_filters(&self) -> ProjectFilters {
        ProjectFilters {
            search_term: self.search.clone().filter(|s| !s.is_empty()),
            category: parse_ids(self.category.as_deref()),
            industry: parse_ids(self.industry.as_deref()),
            skills: parse_ids(self.skills.as_deref()),
            specialties: parse_ids(self.specialties.as_deref()),
            sort_by: self.sort_by.as_deref().and_then(parse_sort),
        }
    }
}

/// Parse a comma-separated id list, silently dropping tokens that are not integers.
///
/// Absent or blank input, or input without a single valid id, means no filter.
pub fn parse_ids(raw: Option<&str>) -> Option<Vec<ReferenceId>> {
    let ids: Vec<ReferenceId> = raw?
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();

    (!ids.is_empty()).then_some(ids)
}

fn parse_sort(raw: &str) -> Option<SortOrder> {
    if raw.is_empty() {
        return None;
    }
    match SortOrder::from_str(raw) {
        Ok(order) => Some(order),
        Err(_) => {
            tracing::debug!(sort_by = raw, "ignoring unknown sort key");
            None
        }
    }
}

/// Only an optional minus sign followed by ASCII digits is accepted, so `+2`
/// or ` 2` are rejected like any other non-numeric id.
fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request(INVALID_ID_MESSAGE));
    }
    raw.parse::<i64>()
        .map(ProjectId::new)
        .map_err(|_| ApiError::bad_request(INVALID_ID_MESSAGE))
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[instrument(name = "GET /projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
    query: Result<Query<ListProjectsQuery>, QueryRejection>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let Query(query) = query?;
    let filters = query.to_filters();
    let projects = app_state.project_service.list_projects(Some(&filters)).await;
    tracing::debug!(count = projects.len(), "listed projects");
    Ok(Json(projects))
}

#[instrument(name = "GET /projects/metadata/filters", skip(app_state))]
async fn get_filter_options(State(app_state): State<AppState>) -> Json<FilterOptions> {
    Json(app_state.project_service.get_filter_options().await)
}

#[instrument(name = "GET /projects/:id", skip(app_state))]
async fn get_project(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id = parse_project_id(&id)?;
    let project = app_state.project_service.get_project(id).await?;
    Ok(Json(project))
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/metadata/filters", get(get_filter_options))
        .route("/:id", get(get_project))
}
