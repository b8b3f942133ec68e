use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::error::ConfigError;

/// Application-wide error type.
///
/// Every handler returns `AppResult`, so storage failures on any route end
/// up as a JSON error body instead of an unanswered request.
#[derive(Error, Debug)]
pub enum AppError {
    /// Record targeted by id does not exist
    #[error("{entity} not found")]
    NotFound { entity: String },

    /// Malformed request input such as an unparsable id
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// JSON body could not be read or decoded
    #[error("Invalid JSON body: {message}")]
    InvalidJson { code: &'static str, message: String },

    /// Field-level validation failures
    #[error("Validation failed: {}", .errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(", "))]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Storage operation failed; `operation` reads like "deleting the user"
    #[error("An error occurred while {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

/// A single field that failed validation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

impl AppError {
    pub fn not_found(entity: &str) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = error.field().unwrap_or("settings").to_string();
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ValidationFieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors { errors: fields }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match &rejection {
            JsonRejection::JsonDataError(_) => "INVALID_JSON",
            JsonRejection::JsonSyntaxError(_) => "JSON_SYNTAX_ERROR",
            JsonRejection::MissingJsonContentType(_) => "MISSING_CONTENT_TYPE",
            JsonRejection::BytesRejection(_) => "REQUEST_BODY_ERROR",
            _ => "JSON_ERROR",
        };
        AppError::InvalidJson {
            code,
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
