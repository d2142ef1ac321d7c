use std::collections::HashMap;

use crate::domain::models::{
    Organization, Position, Project, ProjectId, ReferenceData, ReferenceEntity, ReferenceId,
    Subcategory,
};

use super::raw::{RawPosition, RawProject};

/// Id-indexed view over the reference tables.
///
/// When a table repeats an id, the first record wins.
pub struct ReferenceIndex<'a> {
    skills: HashMap<ReferenceId, &'a ReferenceEntity>,
    specialties: HashMap<ReferenceId, &'a ReferenceEntity>,
    industries: HashMap<ReferenceId, &'a ReferenceEntity>,
    categories: HashMap<ReferenceId, &'a ReferenceEntity>,
    subcategories: HashMap<ReferenceId, &'a Subcategory>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self {
            skills: index_by_id(&data.skills, |e| e.id),
            specialties: index_by_id(&data.specialties, |e| e.id),
            industries: index_by_id(&data.industries, |e| e.id),
            categories: index_by_id(&data.categories, |e| e.id),
            subcategories: index_by_id(&data.subcategories, |e| e.id),
        }
    }

    pub fn skill(&self, id: ReferenceId) -> ReferenceEntity {
        resolve(&self.skills, "skills", id)
    }

    pub fn specialty(&self, id: ReferenceId) -> ReferenceEntity {
        resolve(&self.specialties, "specialties", id)
    }

    pub fn industry(&self, id: ReferenceId) -> ReferenceEntity {
        resolve(&self.industries, "industries", id)
    }

    pub fn category(&self, id: ReferenceId) -> ReferenceEntity {
        resolve(&self.categories, "categories", id)
    }

    pub fn subcategory(&self, id: ReferenceId) -> Subcategory {
        match self.subcategories.get(&id) {
            Some(subcategory) => (*subcategory).clone(),
            None => {
                tracing::warn!(table = "subcategories", id, "unresolved reference id");
                Subcategory::unknown(id)
            }
        }
    }
}

fn index_by_id<'a, T>(
    items: &'a [T],
    id: impl Fn(&T) -> ReferenceId,
) -> HashMap<ReferenceId, &'a T> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(id(item)).or_insert(item);
    }
    index
}

fn resolve(
    table: &HashMap<ReferenceId, &ReferenceEntity>,
    name: &'static str,
    id: ReferenceId,
) -> ReferenceEntity {
    match table.get(&id) {
        Some(entity) => (*entity).clone(),
        None => {
            tracing::warn!(table = name, id, "unresolved reference id");
            ReferenceEntity::unknown(id)
        }
    }
}

/// Convert a raw project into a domain project, embedding its reference records.
pub fn to_domain_project(raw: RawProject, index: &ReferenceIndex<'_>) -> Project {
    Project {
        id: ProjectId::new(raw.id),
        title: raw.title,
        description: raw.description,
        organization: Organization {
            id: raw.organization.id,
            name: raw.organization.name,
            logo: raw.organization.logo,
            industry: index.industry(raw.organization.industry),
        },
        project_leader: raw.project_leader,
        category: index.category(raw.category),
        subcategory: index.subcategory(raw.subcategory),
        status: raw.status,
        creation_date: raw.creation_date,
        start_date: raw.start_date,
        published_at: raw.published_at,
        budget: raw.budget,
        total_hours: raw.total_hours,
        goals: raw.goals,
        faqs: raw.faqs,
        positions: raw
            .positions
            .into_iter()
            .map(|pos| to_domain_position(pos, index))
            .collect(),
        total_applications_amount: raw.total_applications_amount,
    }
}

fn to_domain_position(raw: RawPosition, index: &ReferenceIndex<'_>) -> Position {
    Position {
        id: raw.id,
        title: raw.title,
        skills: raw.skills.into_iter().map(|id| index.skill(id)).collect(),
        specialties: raw
            .specialties
            .into_iter()
            .map(|id| index.specialty(id))
            .collect(),
        referral_bonus: raw.referral_bonus,
    }
}
