//! Application configuration: the page's sections and HTTP client settings

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::SectionMode;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "qtify.toml";

const DEFAULT_BASE_URL: &str = "https://qtify-backend.labs.crio.do";

/// Configuration for one section on the page
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    pub items_endpoint: String,
    #[serde(default)]
    pub mode: SectionMode,
    #[serde(default)]
    pub taxonomy_endpoint: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Where the file log goes and what it records. `RUST_LOG` overrides `filter`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub dir: PathBuf,
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".logs"),
            filter: "qtify_tui=debug,reqwest=info,warn".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Viewport width units per terminal column, fed to the carousel breakpoints
    pub cell_width: u32,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
    pub sections: Vec<SectionConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_width: 10,
            http: HttpSettings::default(),
            logging: LoggingSettings::default(),
            sections: vec![
                SectionConfig {
                    title: "Top Albums".to_string(),
                    items_endpoint: format!("{}/albums/top", DEFAULT_BASE_URL),
                    mode: SectionMode::Albums,
                    taxonomy_endpoint: None,
                },
                SectionConfig {
                    title: "New Albums".to_string(),
                    items_endpoint: format!("{}/albums/new", DEFAULT_BASE_URL),
                    mode: SectionMode::Albums,
                    taxonomy_endpoint: None,
                },
                SectionConfig {
                    title: "Songs".to_string(),
                    items_endpoint: format!("{}/songs", DEFAULT_BASE_URL),
                    mode: SectionMode::Songs,
                    taxonomy_endpoint: Some(format!("{}/genres", DEFAULT_BASE_URL)),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from `qtify.toml` if it exists, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                tracing::debug!("No config file found, using built-in sections");
                Self::default()
            }
        };
        config.validated()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        tracing::info!(path = %path.display(), sections = config.sections.len(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validated(mut self) -> Result<Self> {
        if self.sections.is_empty() {
            bail!("config must declare at least one section");
        }
        if self.cell_width == 0 {
            bail!("cell_width must be greater than zero");
        }
        for section in &mut self.sections {
            if section.title.trim().is_empty() {
                bail!("section titles must not be empty");
            }
            if section.mode == SectionMode::Albums && section.taxonomy_endpoint.is_some() {
                tracing::warn!(
                    section = %section.title,
                    "taxonomy_endpoint is only used by song sections, ignoring"
                );
                section.taxonomy_endpoint = None;
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_home_page() {
        let config = AppConfig::default().validated().unwrap();
        let titles: Vec<_> = config.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Top Albums", "New Albums", "Songs"]);
        assert_eq!(config.sections[2].mode, SectionMode::Songs);
        assert!(config.sections[2].taxonomy_endpoint.as_deref().unwrap().ends_with("/genres"));
    }

    #[test]
    fn parses_sections_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            cell_width = 8

            [http]
            request_timeout_secs = 5

            [logging]
            dir = "/tmp/qtify-logs"

            [[sections]]
            title = "Hot Albums"
            items_endpoint = "http://localhost:8080/albums/hot"

            [[sections]]
            title = "Songs"
            items_endpoint = "http://localhost:8080/songs"
            mode = "songs"
            taxonomy_endpoint = "http://localhost:8080/genres"
            "#,
        )
        .unwrap()
        .validated()
        .unwrap();

        assert_eq!(config.cell_width, 8);
        assert_eq!(config.http.request_timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.logging.dir, PathBuf::from("/tmp/qtify-logs"));
        assert_eq!(config.logging.filter, LoggingSettings::default().filter);
        assert_eq!(config.sections[0].mode, SectionMode::Albums);
        assert_eq!(config.sections[1].mode, SectionMode::Songs);
    }

    #[test]
    fn album_taxonomy_is_dropped() {
        let config = AppConfig::from_toml(
            r#"
            [[sections]]
            title = "Albums"
            items_endpoint = "/albums"
            taxonomy_endpoint = "/genres"
            "#,
        )
        .unwrap()
        .validated()
        .unwrap();
        assert_eq!(config.sections[0].taxonomy_endpoint, None);
    }

    #[test]
    fn rejects_empty_page_and_blank_titles() {
        let empty = AppConfig { sections: vec![], ..AppConfig::default() };
        assert!(empty.validated().is_err());

        let blank = AppConfig::from_toml(
            r#"
            [[sections]]
            title = "  "
            items_endpoint = "/albums"
            "#,
        )
        .unwrap();
        assert!(blank.validated().is_err());
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let result = AppConfig::from_toml(
            r#"
            [[sections]]
            title = "Podcasts"
            items_endpoint = "/podcasts"
            mode = "podcasts"
            "#,
        );
        assert!(result.is_err());
    }
}
