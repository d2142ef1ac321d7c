//! Shapes of the on-disk catalog documents, before reference ids are resolved.

use serde::Deserialize;
use time::OffsetDateTime;

use crate::domain::models::{Budget, Faq, ProjectLeader, ProjectStatus, ReferenceId};

use super::dates;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub organization: RawOrganization,
    pub project_leader: ProjectLeader,
    pub category: ReferenceId,
    pub subcategory: ReferenceId,
    pub status: ProjectStatus,
    #[serde(deserialize_with = "dates::deserialize")]
    pub creation_date: OffsetDateTime,
    #[serde(deserialize_with = "dates::deserialize")]
    pub start_date: OffsetDateTime,
    #[serde(default, deserialize_with = "dates::deserialize_option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub positions: Vec<RawPosition>,
    #[serde(default)]
    pub total_applications_amount: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrganization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub industry: ReferenceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<ReferenceId>,
    #[serde(default)]
    pub specialties: Vec<ReferenceId>,
    #[serde(default)]
    pub referral_bonus: Option<f64>,
}
