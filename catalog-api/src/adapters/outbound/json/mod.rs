//! JSON-file backed project repository.
//!
//! Both documents are read once at startup and the denormalized catalog is
//! immutable afterwards.

mod conversions;
mod dates;
mod raw;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{
    models::{Project, ProjectFilters, ProjectId, ReferenceData},
    ports::outbound::ProjectRepository,
    query,
};

use conversions::ReferenceIndex;
use raw::RawProject;

/// Locations of the two catalog documents.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub projects: PathBuf,
    pub static_data: PathBuf,
}

impl CatalogPaths {
    pub fn new(projects: impl Into<PathBuf>, static_data: impl Into<PathBuf>) -> Self {
        Self {
            projects: projects.into(),
            static_data: static_data.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct JsonProjectRepository {
    projects: Vec<Project>,
    reference_data: ReferenceData,
}

impl JsonProjectRepository {
    /// Read and denormalize both documents. Any I/O or parse failure aborts the load.
    pub async fn load(paths: &CatalogPaths) -> Result<Self, CatalogLoadError> {
        let reference_data: ReferenceData = read_json(&paths.static_data).await?;
        let raw_projects: Vec<RawProject> = read_json(&paths.projects).await?;

        let repository = Self::from_raw(reference_data, raw_projects);
        tracing::info!(
            projects = repository.projects.len(),
            skills = repository.reference_data.skills.len(),
            specialties = repository.reference_data.specialties.len(),
            industries = repository.reference_data.industries.len(),
            categories = repository.reference_data.categories.len(),
            subcategories = repository.reference_data.subcategories.len(),
            "catalog loaded"
        );

        Ok(repository)
    }

    /// Resolve every reference id in `raw_projects` against `reference_data`.
    fn from_raw(reference_data: ReferenceData, raw_projects: Vec<RawProject>) -> Self {
        let projects = {
            let index = ReferenceIndex::new(&reference_data);
            raw_projects
                .into_iter()
                .map(|raw| conversions::to_domain_project(raw, &index))
                .collect()
        };

        Self::from_parts(reference_data, projects)
    }

    /// Build a repository from an already denormalized catalog.
    pub fn from_parts(reference_data: ReferenceData, projects: Vec<Project>) -> Self {
        Self {
            projects,
            reference_data,
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogLoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl ProjectRepository for JsonProjectRepository {
    async fn find_all(&self, filters: Option<&ProjectFilters>) -> Vec<Project> {
        query::query(&self.projects, filters)
    }

    async fn find_by_id(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    async fn reference_data(&self) -> ReferenceData {
        self.reference_data.clone()
    }
}
