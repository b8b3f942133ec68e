//! Serve command handler
//!
//! Handles `serve --dry-run`; a real start is left to the server module.

use crate::config::StorageBackend;
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration and print a summary without binding or connecting
    ///
    /// # Errors
    /// Returns the first configuration validation error
    pub fn dry_run(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!("✓ Storage backend: {}", self.config.database.backend);
        if self.config.database.backend == StorageBackend::Mongodb {
            println!("✓ Database name fallback: {}", self.config.database.name);
        }
        println!("✓ Log level: {}", self.config.logger.level);
        println!("Dry run completed successfully - configuration is ready for deployment");

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
