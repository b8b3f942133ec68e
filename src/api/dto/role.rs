//! Role-related DTOs for API requests and responses.

use crate::api::dto::lenient;
use crate::models::{NewRole, Role, RolePatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new role.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateRoleRequest {
    #[validate(
        required(message = "Role name is required"),
        length(min = 1, message = "Role name is required")
    )]
    #[serde(default, deserialize_with = "lenient::optional_string")]
    #[schema(min_length = 1, example = "admin")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub permissions: Vec<String>,
}

impl CreateRoleRequest {
    /// Call only after validation has passed.
    pub fn into_new_role(self) -> NewRole {
        NewRole {
            name: self.name.unwrap_or_default(),
            permissions: self.permissions,
        }
    }
}

/// Request body for updating a role. Absent fields keep their stored value.
///
/// The name cannot be cleared, so `name: null` is treated as absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string_list")]
    pub permissions: Option<Vec<String>>,
}

impl UpdateRoleRequest {
    pub fn into_patch(self) -> RolePatch {
        RolePatch {
            name: self.name,
            permissions: self.permissions,
        }
    }
}

/// Role as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.to_hex(),
            name: role.name,
            permissions: role.permissions,
        }
    }
}
