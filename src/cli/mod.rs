//! CLI module for roster-rs
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::{Execution, execute_command};
pub use parser::{Backend, Cli, Commands, Environment, LogLevel};

use crate::config::Environment as AppEnvironment;
use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration files and apply CLI overrides
///
/// # Returns
/// Validated settings and the environment they were loaded for
///
/// # Errors
/// Returns error if loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<(Settings, AppEnvironment)> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    let settings = merger.merge_cli_args(cli)?;
    Ok((settings, merger.environment()))
}

/// Initialize the global logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}
