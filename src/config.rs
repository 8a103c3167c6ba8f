//! Settings for the `stl_demo` walkthrough, read from an optional TOML file.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub initial_len: usize,
    pub push_values: Vec<i64>,
    pub insert_index: usize,
    pub insert_value: i64,
    pub splice_index: usize,
    pub splice_values: Vec<i64>,
    pub erase_begin: usize,
    pub erase_end: usize,
    pub reserve: usize,
    pub colored: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            initial_len: 5,
            push_values: vec![10, 20],
            insert_index: 3,
            insert_value: 30,
            splice_index: 1,
            splice_values: vec![40, 50],
            erase_begin: 1,
            erase_end: 3,
            reserve: 32,
            colored: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        debug!("loaded demo config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Catches settings that could never succeed. Indices are checked later by
    /// the containers themselves, which is part of what the demo shows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.erase_begin > self.erase_end {
            return Err(ConfigError::validation(
                "erase_end",
                format!("must be >= erase_begin ({})", self.erase_begin),
            ));
        }
        if self.reserve == 0 {
            return Err(ConfigError::validation("reserve", "must be greater than zero"));
        }
        Ok(())
    }
}
