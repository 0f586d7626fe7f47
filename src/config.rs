use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::render::RenderConfig;
use crate::search::SearchConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_nodes == Some(0) {
            return Err(ConfigError::Validation(
                "search.max_nodes must be > 0".into(),
            ));
        }
        if self.search.log_interval == 0 {
            return Err(ConfigError::Validation(
                "search.log_interval must be > 0".into(),
            ));
        }

        if self.render.peg.is_whitespace() || self.render.hole.is_whitespace() {
            return Err(ConfigError::Validation(
                "render.peg and render.hole must be visible characters".into(),
            ));
        }
        if self.render.peg == self.render.hole {
            return Err(ConfigError::Validation(
                "render.peg and render.hole must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
