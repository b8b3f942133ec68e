//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A setting holds an unacceptable value
    #[error("Invalid setting {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Unknown environment '{value}'. Valid values are: development, test, staging, production")]
    UnknownEnvironment { value: String },

    /// Two settings sources were given that cannot be combined
    #[error("Conflicting configuration sources: {0}")]
    ConflictingSources(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Setting name for errors tied to one field
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}
