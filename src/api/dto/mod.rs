//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - User request/response DTOs
//! - `role` - Role request/response DTOs
//! - `error` - Error and confirmation bodies
//! - `lenient` - Field deserializers that cast loosely typed input

mod error;
pub(crate) mod lenient;
mod role;
mod user;

pub use error::{ErrorResponse, MessageResponse};
pub use role::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserResponse};
