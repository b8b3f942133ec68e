//! Configuration validation logic
//!
//! Checks that loaded settings are usable before the server starts.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, FileSettings, LoggerSettings, ServerConfig, Settings, StorageBackend,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Accepted MongoDB connection string schemes
const VALID_URL_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be blank
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid(
                "server.host",
                "Host is required. Use 0.0.0.0 to listen on every interface.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::invalid(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// The in-memory backend ignores the connection settings entirely.
    /// For MongoDB:
    /// - URL must not be empty and must use a `mongodb` scheme
    /// - Max and min connections must be greater than 0
    /// - Min connections must not exceed max connections
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StorageBackend::Memory {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err(ConfigError::invalid(
                "database.url",
                "Database URL is required. Set database.url, ROSTER_DATABASE__URL or MONGO_URI.",
            ));
        }

        if !VALID_URL_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::invalid(
                "database.url",
                "Invalid database URL format. Expected mongodb://[user:password@]host[:port][/database]",
            ));
        }

        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid(
                "database.name",
                "Database name must not be empty.",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::invalid(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::invalid(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::invalid(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all settings, returning the first error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
