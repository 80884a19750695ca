use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::ConfigError;
use crate::core::types::Format;

/// Settings for installing the vector adapters and for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub registration: RegistrationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Server type name to look up, usually `vector`
    pub type_name: String,
    /// Format used when a caller does not ask for one
    pub default_format: Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            registration: RegistrationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            type_name: "vector".to_string(),
            default_format: Format::Binary,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::TomlParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, or fall back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("Configuration file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let type_name = self.registration.type_name.trim();
        if type_name.is_empty() || type_name != self.registration.type_name {
            return Err(ConfigError::InvalidValue {
                field: "registration.type_name".to_string(),
                value: self.registration.type_name.clone(),
            });
        }
        Ok(())
    }
}
