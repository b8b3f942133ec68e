//! User-related DTOs for API requests and responses.

use crate::api::dto::lenient;
use crate::models::{NewUser, User, UserPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
///
/// Every field is optional; unknown fields are ignored. Scalars are cast
/// to strings and a single role is read as a one-element list.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    #[schema(example = "active")]
    pub status: Option<String>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            roles: self.roles,
            status: self.status,
        }
    }
}

/// Request body for updating a user.
///
/// Absent fields keep their stored value; an explicit `null` clears the
/// field (`roles: null` empties the list).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "lenient::nullable_string")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable_string")]
    #[schema(value_type = Option<String>, format = "email")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::optional_string_list")]
    pub roles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::nullable_string")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            email: self.email,
            roles: self.roles,
            status: self.status,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// User as returned by the API. Unset optional fields render as `null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// 24-character hex ObjectId
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0ffee0123456789abcd")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub status: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            roles: user.roles,
            status: user.status,
        }
    }
}
