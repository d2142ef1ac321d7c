use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

use crate::adapters::outbound::CatalogPaths;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub catalog: CatalogSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Frontend origin allowed by CORS.
    pub app_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CatalogSettings {
    pub data_dir: PathBuf,
    pub projects_file: String,
    pub static_data_file: String,
}

impl CatalogSettings {
    pub fn paths(&self) -> CatalogPaths {
        CatalogPaths::new(
            self.data_dir.join(&self.projects_file),
            self.data_dir.join(&self.static_data_file),
        )
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let config_directory = base_path.join("config");

    let raw_environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&raw_environment).map_err(|_| {
        config::ConfigError::Message(format!(
            "unsupported APP_ENVIRONMENT '{raw_environment}', use 'local' or 'production'"
        ))
    })?;

    read_config_from(&config_directory, environment)
}

/// Layer `base.yaml`, `{environment}.yaml` and `CATALOG_*` variables from `config_directory`.
pub fn read_config_from(
    config_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("CATALOG")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const BASE: &str = "\
application:
  port: 3000
  host: 0.0.0.0
  app_url: http://localhost:5173
catalog:
  data_dir: data
  projects_file: projects.json
  static_data_file: static-data.json
";

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(Environment::from_str("LOCAL").unwrap(), Environment::Local);
        assert_eq!(
            Environment::from_str("production").unwrap(),
            Environment::Production
        );
        assert!(Environment::from_str("staging").is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn environment_file_overrides_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.yaml"), BASE).unwrap();
        fs::write(
            dir.path().join("production.yaml"),
            "application:\n  app_url: https://catalog.example.com\ncatalog:\n  data_dir: /srv/catalog\n",
        )
        .unwrap();

        let settings = read_config_from(dir.path(), Environment::Production).unwrap();
        assert_eq!(settings.application.port, 3000);
        assert_eq!(settings.application.app_url, "https://catalog.example.com");

        let paths = settings.catalog.paths();
        assert_eq!(paths.projects, PathBuf::from("/srv/catalog/projects.json"));
        assert_eq!(
            paths.static_data,
            PathBuf::from("/srv/catalog/static-data.json")
        );
    }

    #[test]
    fn missing_environment_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("base.yaml"), BASE).unwrap();

        assert!(read_config_from(dir.path(), Environment::Local).is_err());
    }
}
