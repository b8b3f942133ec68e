//! Role service for business logic operations.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::models::{NewRole, Role, RolePatch};
use crate::repositories::DocumentRepository;

/// Role service wrapping the role repository.
#[derive(Clone)]
pub struct RoleService {
    repo: Arc<dyn DocumentRepository<Role>>,
}

impl RoleService {
    pub fn new(repo: Arc<dyn DocumentRepository<Role>>) -> Self {
        Self { repo }
    }

    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.repo.list_all().await
    }

    pub async fn create_role(&self, new_role: NewRole) -> AppResult<Role> {
        let role = self.repo.insert(new_role.into_role()).await?;
        tracing::info!(role_id = %role.id, role_name = %role.name, "Role created");
        Ok(role)
    }

    /// Returns `None` when no role has `id`.
    pub async fn update_role(&self, id: ObjectId, patch: RolePatch) -> AppResult<Option<Role>> {
        self.repo.update(id, patch).await
    }

    pub async fn delete_role(&self, id: ObjectId) -> AppResult<Role> {
        let role = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))?;
        tracing::info!(role_id = %id, "Role deleted");
        Ok(role)
    }
}
