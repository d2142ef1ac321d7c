use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::app::AppliedFilters;
use crate::types::{ApiErrorBody, FilterOptions, Project};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;

        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{}", error_message(&body, status, call_name))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T> {
        let response = self.send(request, call_name).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    pub async fn list_projects(&self, filters: &AppliedFilters) -> Result<Vec<Project>> {
        self.get_json(
            self.client
                .get(self.endpoint("/projects")?)
                .query(&filters.query_params()),
            "GET /projects",
        )
        .await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project> {
        self.get_json(
            self.client.get(self.endpoint(&format!("/projects/{}", id))?),
            "GET /projects/:id",
        )
        .await
    }

    pub async fn get_filter_options(&self) -> Result<FilterOptions> {
        self.get_json(
            self.client.get(self.endpoint("/projects/metadata/filters")?),
            "GET /projects/metadata/filters",
        )
        .await
    }
}

/// Prefer the server's own message when the body carries one.
fn error_message(body: &str, status: StatusCode, call_name: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) => {
            let code = error.status_code.unwrap_or_else(|| status.as_u16());
            format!("{} ({})", error.message, code)
        }
        Err(_) => format!("{} returned {}", call_name, status),
    }
}
