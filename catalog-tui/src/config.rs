use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const API_URL_ENV: &str = "CATALOG_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Base URL of the catalog-api server, e.g. "http://localhost:3000"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl TuiConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("catalog-tui")
            .join("config.toml"))
    }

    /// Load config from disk, then apply `CATALOG_API_URL` if set.
    /// A missing file yields the default config.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::parse(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_default_url() {
        let config = TuiConfig::parse("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.api_url, "http://localhost:3000");
    }

    #[test]
    fn file_value_is_read() {
        let config = TuiConfig::parse("api_url = \"https://catalog.example.com\"").unwrap();
        assert_eq!(config.api_url, "https://catalog.example.com");
    }

    #[test]
    fn env_override_wins_unless_blank() {
        let config = TuiConfig::default()
            .with_api_url_override(Some("http://10.0.0.5:3000".to_string()));
        assert_eq!(config.api_url, "http://10.0.0.5:3000");

        let config = TuiConfig::default().with_api_url_override(Some("  ".to_string()));
        assert_eq!(config.api_url, "http://localhost:3000");
    }
}
