use super::schema::ApplocateConfig;
use applocate_common::ElementDescriptor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("No element named '{0}' in config")]
    UnknownElement(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./applocate.yaml
    /// 2. ~/.applocate/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<ApplocateConfig, ConfigError> {
        for candidate in Self::default_paths() {
            if candidate.exists() {
                return Self::load_from(&candidate).await;
            }
        }

        debug!("no config file found, using defaults");
        Ok(ApplocateConfig::default())
    }

    /// Explicit path if given, otherwise the default search.
    pub async fn load(path: Option<&Path>) -> Result<ApplocateConfig, ConfigError> {
        match path {
            Some(path) => Self::load_from(path).await,
            None => Self::load_default().await,
        }
    }

    pub async fn load_from(path: &Path) -> Result<ApplocateConfig, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<ApplocateConfig, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(ApplocateConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./applocate.yaml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".applocate").join("config.yaml"));
        }
        paths
    }
}

impl ApplocateConfig {
    /// Like [`ApplocateConfig::element`] but fails with `UnknownElement`.
    pub fn require_element(&self, name: &str) -> Result<&ElementDescriptor, ConfigError> {
        self.element(name)
            .ok_or_else(|| ConfigError::UnknownElement(name.to_string()))
    }
}
