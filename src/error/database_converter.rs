//! Conversion of MongoDB driver errors into `AppError`.

use mongodb::error::{Error as MongoError, ErrorKind};

use crate::error::AppError;

/// Converts driver errors into `AppError::Database`, keeping the operation
/// label that ends up in the client-facing message.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Wraps a driver error for the given operation.
    ///
    /// # Arguments
    /// * `error` - The error returned by the MongoDB driver
    /// * `operation` - What was being attempted, e.g. "creating the role"
    pub fn convert_mongo_error(error: MongoError, operation: &str) -> AppError {
        tracing::debug!(
            operation = %operation,
            kind = Self::classify(&error),
            error = %error,
            "Storage operation failed"
        );

        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::new(error),
        }
    }

    /// Short label for the failure category, used in logs.
    pub fn classify(error: &MongoError) -> &'static str {
        match error.kind.as_ref() {
            ErrorKind::ServerSelection { .. } => "server_selection",
            ErrorKind::Io(_) => "io",
            ErrorKind::Authentication { .. } => "authentication",
            ErrorKind::Write(_) => "write",
            ErrorKind::Command(_) => "command",
            ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => "serialization",
            _ => "other",
        }
    }

    /// Whether the failure means the database could not be reached at all.
    pub fn is_connectivity_error(error: &MongoError) -> bool {
        matches!(
            error.kind.as_ref(),
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
        )
    }
}
