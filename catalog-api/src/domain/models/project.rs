use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Category, Industry, ProjectId, ReferenceId, Skill, Specialty, Subcategory};

/// A freelance/gig listing with every reference id resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub organization: Organization,
    pub project_leader: ProjectLeader,
    pub category: Category,
    pub subcategory: Subcategory,
    pub status: ProjectStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    pub budget: Budget,
    pub total_hours: f64,
    pub goals: Vec<String>,
    pub faqs: Vec<Faq>,
    pub positions: Vec<Position>,
    pub total_applications_amount: u32,
}

impl Project {
    /// Published date used for ordering; unpublished projects sort as the epoch.
    pub fn published_sort_key(&self) -> OffsetDateTime {
        self.published_at.unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    pub fn has_skill_in(&self, ids: &[ReferenceId]) -> bool {
        self.positions
            .iter()
            .any(|pos| pos.skills.iter().any(|skill| ids.contains(&skill.id)))
    }

    pub fn has_specialty_in(&self, ids: &[ReferenceId]) -> bool {
        self.positions
            .iter()
            .any(|pos| pos.specialties.iter().any(|spec| ids.contains(&spec.id)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub logo: String,
    pub industry: Industry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLeader {
    pub id: i64,
    pub name: String,
    pub last_name: String,
}

/// Either an hourly range (`hour_from`..`hour_to`) or a fixed `total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub hour_from: Option<f64>,
    pub hour_to: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    pub title: String,
    pub skills: Vec<Skill>,
    pub specialties: Vec<Specialty>,
    pub referral_bonus: Option<f64>,
}

/// Publication status of a project.
///
/// Statuses outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Published,
    Draft,
    Archived,
    Active,
    Other(String),
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Published => "PUBLISHED".to_string(),
            ProjectStatus::Draft => "DRAFT".to_string(),
            ProjectStatus::Archived => "ARCHIVED".to_string(),
            ProjectStatus::Active => "ACTIVE".to_string(),
            ProjectStatus::Other(other) => other,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PUBLISHED" => Self::Published,
            "DRAFT" => Self::Draft,
            "ARCHIVED" => Self::Archived,
            "ACTIVE" => Self::Active,
            _ => Self::Other(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStatus;

    #[test]
    fn project_status_serializes_known_variant_as_upper_case() {
        let json = serde_json::to_string(&ProjectStatus::Published).expect("serialize status");
        assert_eq!(json, "\"PUBLISHED\"");
    }

    #[test]
    fn project_status_keeps_unknown_values_verbatim() {
        let status: ProjectStatus =
            serde_json::from_str("\"ON_HOLD\"").expect("deserialize status");
        assert_eq!(status, ProjectStatus::Other("ON_HOLD".to_string()));

        let json = serde_json::to_string(&status).expect("serialize status");
        assert_eq!(json, "\"ON_HOLD\"");
    }
}
