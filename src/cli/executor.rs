//! Command executor for dispatching CLI commands

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// What `main` should do once a command has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Start the HTTP server
    StartServer,
    /// Nothing left to do
    Exit,
}

/// Execute a CLI command with the given settings
///
/// A missing subcommand behaves like `serve`.
pub fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<Execution> {
    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            ServeCommandHandler::new(settings.clone()).dry_run()?;
            Ok(Execution::Exit)
        }
        Some(Commands::Serve { .. }) | None => Ok(Execution::StartServer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use clap::Parser;

    fn config() -> Settings {
        let mut config = Settings::default();
        config.database.backend = StorageBackend::Memory;
        config
    }

    #[test]
    fn test_default_command_starts_server() {
        let cli = Cli::try_parse_from(["roster-rs"]).unwrap();
        assert_eq!(execute_command(&cli, &config()).unwrap(), Execution::StartServer);
    }

    #[test]
    fn test_serve_starts_server() {
        let cli = Cli::try_parse_from(["roster-rs", "serve", "--port", "8080"]).unwrap();
        assert_eq!(execute_command(&cli, &config()).unwrap(), Execution::StartServer);
    }

    #[test]
    fn test_dry_run_exits() {
        let cli = Cli::try_parse_from(["roster-rs", "serve", "--dry-run"]).unwrap();
        assert_eq!(execute_command(&cli, &config()).unwrap(), Execution::Exit);
    }
}
