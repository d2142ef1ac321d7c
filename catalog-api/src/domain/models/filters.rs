use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{Project, ReferenceId};

/// Ordering applied to a project listing by publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[strum(serialize = "newest")]
    Newest,
    #[strum(serialize = "oldest")]
    Oldest,
}

/// Optional, conjunctive project filters.
///
/// Kinds combine with AND; ids within one list combine with OR. `None`, an
/// empty list and an empty search term all mean "no filter of that kind".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub search_term: Option<String>,
    pub category: Option<Vec<ReferenceId>>,
    pub industry: Option<Vec<ReferenceId>>,
    pub skills: Option<Vec<ReferenceId>>,
    pub specialties: Option<Vec<ReferenceId>>,
    pub sort_by: Option<SortOrder>,
}

impl ProjectFilters {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn categories(mut self, ids: impl Into<Vec<ReferenceId>>) -> Self {
        self.category = Some(ids.into());
        self
    }

    pub fn industries(mut self, ids: impl Into<Vec<ReferenceId>>) -> Self {
        self.industry = Some(ids.into());
        self
    }

    pub fn skills(mut self, ids: impl Into<Vec<ReferenceId>>) -> Self {
        self.skills = Some(ids.into());
        self
    }

    pub fn specialties(mut self, ids: impl Into<Vec<ReferenceId>>) -> Self {
        self.specialties = Some(ids.into());
        self
    }

    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.sort_by = Some(order);
        self
    }

    /// Whether `project` passes every predicate filter. Sorting is not considered.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(term) = self.search_term.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let title_match = project.title.to_lowercase().contains(&term);
            let desc_match = project.description.to_lowercase().contains(&term);
            if !title_match && !desc_match {
                return false;
            }
        }

        if let Some(ids) = active(&self.category) {
            if !ids.contains(&project.category.id) {
                return false;
            }
        }

        if let Some(ids) = active(&self.industry) {
            if !ids.contains(&project.organization.industry.id) {
                return false;
            }
        }

        if let Some(ids) = active(&self.skills) {
            if !project.has_skill_in(ids) {
                return false;
            }
        }

        if let Some(ids) = active(&self.specialties) {
            if !project.has_specialty_in(ids) {
                return false;
            }
        }

        true
    }
}

fn active(ids: &Option<Vec<ReferenceId>>) -> Option<&[ReferenceId]> {
    ids.as_deref().filter(|ids| !ids.is_empty())
}
