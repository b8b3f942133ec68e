//! User service for business logic operations.
//!
//! Sits between the HTTP handlers and the user repository.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User, UserPatch};
use crate::repositories::DocumentRepository;

/// User service for handling user-related business logic.
///
/// Cloning only bumps the repository's reference count.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn DocumentRepository<User>>,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: Arc<dyn DocumentRepository<User>>) -> Self {
        Self { repo }
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }

    /// Creates a new user with a freshly generated id.
    ///
    /// # Arguments
    /// * `new_user` - The user data to create
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = self.repo.insert(new_user.into_user()).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Updates a user's fields.
    ///
    /// Only fields present in `patch` are written. An unknown id is not an
    /// error here: the caller receives `None`.
    ///
    /// # Arguments
    /// * `id` - The user's ID
    /// * `patch` - The fields to overwrite
    pub async fn update_user(&self, id: ObjectId, patch: UserPatch) -> AppResult<Option<User>> {
        let updated = self.repo.update(id, patch).await?;
        if updated.is_none() {
            tracing::debug!(user_id = %id, "Update matched no user");
        }
        Ok(updated)
    }

    /// Deletes a user by their ID.
    ///
    /// # Returns
    /// The deleted user, or `NotFound` error
    pub async fn delete_user(&self, id: ObjectId) -> AppResult<User> {
        let user = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(user)
    }
}
