#![allow(dead_code)]

use std::fs;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::adapters::outbound::CatalogPaths;
use catalog_api::config::ApplicationSettings;
use catalog_api::{factory, router};

pub const STATIC_DATA: &str = r#"{
    "skills": [{ "id": 100, "name": "React" }, { "id": 200, "name": "Python" }],
    "specialties": [{ "id": 300, "name": "Data Science" }],
    "industries": [{ "id": 10, "name": "Tech" }, { "id": 20, "name": "Finance" }],
    "categories": [{ "id": 1, "name": "Dev" }, { "id": 2, "name": "Data" }],
    "subcategories": [{ "id": 5, "name": "Web", "categoryId": 1 }]
}"#;

pub const PROJECTS: &str = r#"[
    {
        "id": 1,
        "title": "Website Development",
        "description": "React project",
        "organization": { "id": 7, "name": "Acme", "logo": "acme.png", "industry": 10 },
        "projectLeader": { "id": 3, "name": "Ada", "lastName": "Lovelace" },
        "category": 1,
        "subcategory": 5,
        "status": "PUBLISHED",
        "creationDate": "2024-12-01T10:00:00.000Z",
        "startDate": "2025-02-01T00:00:00.000Z",
        "publishedAt": "2025-01-01T00:00:00.000Z",
        "budget": { "hourFrom": 40, "hourTo": 60, "total": null },
        "totalHours": 320,
        "goals": [],
        "faqs": [],
        "positions": [
            { "id": 11, "title": "Frontend Developer", "skills": [100], "specialties": [], "referralBonus": 250 }
        ],
        "totalApplicationsAmount": 4
    },
    {
        "id": 2,
        "title": "Data Analysis",
        "description": "Python project",
        "organization": { "id": 8, "name": "Bank", "logo": "bank.png", "industry": 20 },
        "projectLeader": { "id": 4, "name": "Grace", "lastName": "Hopper" },
        "category": 2,
        "subcategory": 42,
        "status": "PUBLISHED",
        "creationDate": "2023-11-01T10:00:00.000Z",
        "startDate": "2024-02-01T00:00:00.000Z",
        "publishedAt": "2024-01-01T00:00:00.000Z",
        "budget": { "hourFrom": null, "hourTo": null, "total": 12000 },
        "totalHours": 200,
        "goals": [],
        "faqs": [],
        "positions": [
            { "id": 12, "title": "Data Analyst", "skills": [200], "specialties": [300], "referralBonus": null }
        ],
        "totalApplicationsAmount": 0
    }
]"#;

pub fn test_settings() -> ApplicationSettings {
    ApplicationSettings {
        port: 0,
        host: "127.0.0.1".to_string(),
        app_url: "http://localhost:5173".to_string(),
    }
}

/// Build the full router over the two-project fixture catalog.
pub async fn build_test_app() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let paths = CatalogPaths::new(
        dir.path().join("projects.json"),
        dir.path().join("static-data.json"),
    );
    fs::write(&paths.projects, PROJECTS).unwrap();
    fs::write(&paths.static_data, STATIC_DATA).unwrap();

    let app_state = factory::build_app_state(&paths).await.unwrap();
    router::create(app_state, &test_settings())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}
