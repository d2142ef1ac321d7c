//! Project builders shared by unit tests.

use time::{macros::datetime, OffsetDateTime};

use super::models::{
    Budget, Organization, Position, Project, ProjectId, ProjectLeader, ProjectStatus,
    ReferenceEntity, Subcategory,
};

pub fn make_project(id: i64, title: &str, description: &str) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        organization: Organization {
            id: 1,
            name: "Acme".to_string(),
            logo: "https://example.com/acme.png".to_string(),
            industry: ReferenceEntity::new(10, "Tech"),
        },
        project_leader: ProjectLeader {
            id: 1,
            name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        },
        category: ReferenceEntity::new(1, "Dev"),
        subcategory: Subcategory {
            id: 1,
            name: "Web".to_string(),
            category_id: Some(1),
        },
        status: ProjectStatus::Published,
        creation_date: datetime!(2024-06-01 00:00 UTC),
        start_date: datetime!(2025-02-01 00:00 UTC),
        published_at: None,
        budget: Budget::default(),
        total_hours: 100.0,
        goals: vec![],
        faqs: vec![],
        positions: vec![],
        total_applications_amount: 0,
    }
}

pub fn with_category(mut project: Project, id: i64, name: &str) -> Project {
    project.category = ReferenceEntity::new(id, name);
    project
}

pub fn with_industry(mut project: Project, id: i64, name: &str) -> Project {
    project.organization.industry = ReferenceEntity::new(id, name);
    project
}

pub fn with_published_at(mut project: Project, at: OffsetDateTime) -> Project {
    project.published_at = Some(at);
    project
}

pub fn with_position(
    mut project: Project,
    skills: &[(i64, &str)],
    specialties: &[(i64, &str)],
) -> Project {
    let id = project.positions.len() as i64 + 1;
    project.positions.push(Position {
        id,
        title: format!("Position {id}"),
        skills: skills
            .iter()
            .map(|(id, name)| ReferenceEntity::new(*id, *name))
            .collect(),
        specialties: specialties
            .iter()
            .map(|(id, name)| ReferenceEntity::new(*id, *name))
            .collect(),
        referral_bonus: None,
    });
    project
}

/// The two-project catalog used throughout the filter tests.
pub fn two_project_catalog() -> Vec<Project> {
    let website = with_published_at(
        with_position(
            with_industry(
                with_category(
                    make_project(1, "Website Development", "React project"),
                    1,
                    "Dev",
                ),
                10,
                "Tech",
            ),
            &[(100, "React")],
            &[],
        ),
        datetime!(2025-01-01 00:00 UTC),
    );
    let analysis = with_published_at(
        with_position(
            with_industry(
                with_category(make_project(2, "Data Analysis", "Python project"), 2, "Data"),
                20,
                "Finance",
            ),
            &[(200, "Python")],
            &[(300, "Data Science")],
        ),
        datetime!(2024-01-01 00:00 UTC),
    );

    vec![website, analysis]
}
