use serde::{Deserialize, Serialize};

use super::ReferenceId;

/// Name shown for a reference id that has no matching lookup record.
pub const UNKNOWN_REFERENCE_NAME: &str = "Unknown";

/// A named lookup record referenced by id from projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntity {
    pub id: ReferenceId,
    pub name: String,
}

impl ReferenceEntity {
    pub fn new(id: ReferenceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Placeholder used when `id` does not resolve against its table.
    pub fn unknown(id: ReferenceId) -> Self {
        Self::new(id, UNKNOWN_REFERENCE_NAME)
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_REFERENCE_NAME
    }
}

pub type Skill = ReferenceEntity;
pub type Specialty = ReferenceEntity;
pub type Industry = ReferenceEntity;
pub type Category = ReferenceEntity;

/// A subcategory, optionally pointing at its parent category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: ReferenceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<ReferenceId>,
}

impl Subcategory {
    pub fn unknown(id: ReferenceId) -> Self {
        Self {
            id,
            name: UNKNOWN_REFERENCE_NAME.to_string(),
            category_id: None,
        }
    }
}

/// The complete set of lookup tables loaded alongside the projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub industries: Vec<Industry>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// Reference tables exposed to clients for building filter pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub skills: Vec<Skill>,
    pub specialties: Vec<Specialty>,
    pub industries: Vec<Industry>,
    pub categories: Vec<Category>,
}

impl From<ReferenceData> for FilterOptions {
    fn from(data: ReferenceData) -> Self {
        Self {
            skills: data.skills,
            specialties: data.specialties,
            industries: data.industries,
            categories: data.categories,
        }
    }
}
