//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod role_service;
mod user_service;

pub use role_service::RoleService;
pub use user_service::UserService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since repositories are shared behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub roles: RoleService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: UserService::new(repos.users),
            roles: RoleService::new(repos.roles),
        }
    }
}
