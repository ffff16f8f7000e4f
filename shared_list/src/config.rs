//! List configuration and TOML loading.
//!
//! A [`ListConfig`] names a list (the name is attached to every tracing
//! event the list emits) and sizes its initial allocation.
//!
//! # TOML Example
//!
//! ```toml
//! name = "upstreams"
//! initial_capacity = 16
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use shared_list::{ConfigError, ListConfig, SharedList};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = ListConfig::load(Path::new("list.toml"))?;
//!     let list: SharedList<u32> = SharedList::with_config(&config);
//!     assert_eq!(list.name(), config.name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default list name used in tracing output
pub const DEFAULT_LIST_NAME: &str = "shared_list";

/// Upper bound accepted for `initial_capacity`
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Construction parameters for a [`SharedList`](crate::SharedList).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Label attached to tracing events.
    pub name: String,

    /// Number of elements to preallocate.
    pub initial_capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LIST_NAME.to_string(),
            initial_capacity: 0,
        }
    }
}

impl ListConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ParseError` if the TOML is malformed or has unknown fields
    /// - `ConfigError::ValidationError` if [`validate`](Self::validate) fails
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if the file does not exist, and
    /// the errors of [`from_toml_str`](Self::from_toml_str) otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %config.name, "loaded list config");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `name` is empty
    /// - `initial_capacity` exceeds [`MAX_INITIAL_CAPACITY`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "name cannot be empty".to_string(),
            ));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::ValidationError(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}
