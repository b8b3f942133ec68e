//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Environment as AppEnvironment, StorageBackend};

/// User and role management API server
#[derive(Parser, Debug)]
#[command(name = "roster-rs")]
#[command(about = "User and role management API server backed by MongoDB")]
#[command(long_about = "
roster-rs serves a small JSON API for managing users and roles stored in MongoDB.

EXAMPLES:
    # Start the server with default configuration
    roster-rs serve

    # Start server on custom host and port
    roster-rs serve --host 127.0.0.1 --port 8080

    # Use custom configuration file
    roster-rs --config /path/to/config.toml serve

    # Try the API without a database
    roster-rs serve --backend memory

    # Check configuration without starting server
    roster-rs serve --dry-run

The MongoDB connection string is read from database.url, ROSTER_DATABASE__URL
or MONGO_URI, in that order.
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load exactly this TOML file instead of the layered files in config/.
    /// ROSTER_* environment variables still apply on top of it.
    ///
    /// Example: --config /etc/roster-rs/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects config/{environment}.toml and takes precedence over ROSTER_APP_ENV.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Connects to the configured storage backend and starts accepting
    /// HTTP requests.
    ///
    /// Examples:
    ///   roster-rs serve                            # Start with defaults
    ///   roster-rs serve --host 127.0.0.1 --port 80 # Bind to localhost on port 80
    ///   roster-rs serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// on every interface.
        ///
        /// Default: 0.0.0.0
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 5000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and --verbose/--quiet.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Storage backend override
        #[arg(long, value_enum)]
        backend: Option<Backend>,

        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Test => AppEnvironment::Test,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
        .to_string()
    }
}

/// Storage backend options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Backend {
    #[value(name = "mongodb", alias = "mongo")]
    Mongodb,
    #[value(name = "memory")]
    Memory,
}

impl From<Backend> for StorageBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Mongodb => StorageBackend::Mongodb,
            Backend::Memory => StorageBackend::Memory,
        }
    }
}

impl Cli {
    /// Whether the server should actually start after configuration is loaded.
    pub fn is_dry_run(&self) -> bool {
        matches!(self.command, Some(Commands::Serve { dry_run: true, .. }))
    }
}
