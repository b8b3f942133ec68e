//! Logger setup
//!
//! Builds a `tracing-subscriber` registry from [`LoggerConfig`]:
//! - Console output with color control
//! - File output in Full, Compact or JSON format
//! - Fallback to stderr when the log file stops accepting writes

pub mod config;
pub mod error;
pub(crate) mod writer;


pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use writer::LogFileWriter;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global subscriber with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // File layer goes first so console ANSI settings do not leak into span fields
    // written to the file (tokio-rs/tracing#1817).
    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::subscriber(e.to_string()))?;

    Ok(())
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(config: &FileConfig) -> Result<BoxedLayer, LoggerError> {
    let writer = LogFileWriter::new(config)?;

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}
