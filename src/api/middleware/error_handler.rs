//! Error handler for converting AppError to HTTP responses.
//!
//! Every failure leaves the service as a JSON [`ErrorResponse`] body.
//! Server-side failures are logged with their source chain, while the
//! client only sees the operation that failed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. }
            | AppError::InvalidJson { .. }
            | AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
            AppError::Database { .. } | AppError::Configuration { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - BadRequest, InvalidJson, ValidationErrors → 400 BAD_REQUEST
    /// - Database, Configuration → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_response = match &self {
            AppError::NotFound { .. } => ErrorResponse::new("NOT_FOUND", self.to_string()),
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message.clone()),
            AppError::InvalidJson { code, message } => ErrorResponse::new(code, message.clone()),
            AppError::ValidationErrors { errors } => {
                let summary = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                ErrorResponse::new("VALIDATION_ERROR", summary).with_details(json!(errors))
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = ?source, "Database operation failed");
                ErrorResponse::new("DATABASE_ERROR", self.to_string())
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = ?source, "Configuration error while serving request");
                ErrorResponse::new("CONFIGURATION_ERROR", format!("Configuration error: {}", key))
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_of(AppError::not_found("User")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_database_error_hides_source() {
        let (status, body) = body_of(AppError::Database {
            operation: "fetching roles".to_string(),
            source: anyhow::anyhow!("socket closed at 10.0.0.3"),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An error occurred while fetching roles");
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_validation_errors_carry_details() {
        let (status, body) = body_of(AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "name".to_string(),
                message: "Role name is required".to_string(),
            }],
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Role name is required");
        assert_eq!(body["details"][0]["field"], "name");
    }

    #[test]
    fn test_status_mapping() {
        let bad = AppError::BadRequest {
            message: "Invalid user id 'x'".to_string(),
        };
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let config = AppError::from(crate::config::error::ConfigError::invalid("server.port", "boom"));
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
