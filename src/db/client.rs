//! MongoDB client construction.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::DatabaseConfig;
use crate::error::{AppError, DatabaseErrorConverter};

/// Connects to MongoDB and verifies the server answers a `ping`.
///
/// The database comes from the connection string path when present,
/// otherwise from `database.name`.
///
/// # Errors
///
/// Returns `AppError::Database` if the URL cannot be parsed or the server
/// cannot be reached within the configured timeout.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, AppError> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "parsing the connection string"))?;

    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(config.max_connections);
    options.min_pool_size = Some(config.min_connections);
    options.connect_timeout = Some(Duration::from_secs(config.connection_timeout));
    options.server_selection_timeout = Some(Duration::from_secs(config.connection_timeout));

    let client = Client::with_options(options)
        .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "creating the client"))?;

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&config.name));

    if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
        if DatabaseErrorConverter::is_connectivity_error(&e) {
            tracing::error!(
                timeout_secs = config.connection_timeout,
                "MongoDB is unreachable, check database.url or MONGO_URI"
            );
        }
        return Err(DatabaseErrorConverter::convert_mongo_error(e, "connecting to MongoDB"));
    }

    tracing::info!(database = %database.name(), "Connected to MongoDB");

    Ok(database)
}
