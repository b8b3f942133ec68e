//! Configuration settings structures for roster-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "roster-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_name() -> String {
    "roster".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MongoDB document database
    #[default]
    Mongodb,
    /// Process-local store, contents are lost on exit
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Mongodb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// MongoDB connection string
    #[serde(default)]
    pub url: String,

    /// Database name used when the connection string names none
    #[serde(default = "default_database_name")]
    pub name: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of pooled connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: String::new(),
            name: default_database_name(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::Invalid {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::Invalid {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::Invalid {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
