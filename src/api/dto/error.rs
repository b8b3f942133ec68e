//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error body: `{"error": "...", "code": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Confirmation body for successful deletes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
