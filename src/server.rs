//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use crate::api::{RouterOptions, create_router};
use crate::config::{Environment, StorageBackend, settings::Settings};
use crate::repositories::Repositories;
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Connects the configured storage backend
    /// 3. Binds to configured address
    /// 4. Serves requests until Ctrl+C or SIGTERM, then drains in-flight ones
    ///
    /// # Errors
    /// - Database connection errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            cors_enabled = %self.settings.server.cors_enabled,
            "Server configuration loaded"
        );

        // The connection string may carry credentials, so it is never logged
        match self.settings.database.backend {
            StorageBackend::Mongodb => tracing::info!(
                backend = %self.settings.database.backend,
                max_connections = %self.settings.database.max_connections,
                min_connections = %self.settings.database.min_connections,
                connection_timeout = %self.settings.database.connection_timeout,
                "Database configuration loaded"
            ),
            StorageBackend::Memory => tracing::info!(
                backend = %self.settings.database.backend,
                "Database configuration loaded"
            ),
        }

        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = %self.settings.logger.console.enabled,
            file_enabled = %self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        let repos = Repositories::for_config(&self.settings.database).await?;
        let state = AppState::new(repos);

        let options = RouterOptions::from_settings(&self.settings, self.environment);
        let router = create_router(state, options);
        tracing::info!(api_docs = %options.api_docs, "Router configured");

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires, so the
/// other signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
