//! Configuration merger for CLI arguments and config files
//!
//! Precedence, lowest first: config files, `ROSTER_*` variables,
//! `MONGO_URI` (only for an empty `database.url`), global CLI flags,
//! `serve` flags.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Applies CLI overrides on top of file-based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    /// Create a merger over already loaded settings
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Load the base configuration the way the CLI asks for it
    ///
    /// `--config` reads a single file, otherwise the layered files in the
    /// configuration directory are used. `--env` replaces `ROSTER_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if a file is missing or cannot be parsed. The
    /// settings are validated only after CLI overrides are merged.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        let environment = loader.environment();
        Ok(Self::new(loader.load_unvalidated()?, environment))
    }

    /// Merge CLI arguments with the base configuration and validate the result
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(command) = &cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                backend,
                dry_run: _,
            } => {
                if let Some(host) = host {
                    config.server.host = host.clone();
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                // Command-specific level wins over --verbose/--quiet
                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
                if let Some(backend) = backend {
                    config.database.backend = (*backend).into();
                }
            }
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
