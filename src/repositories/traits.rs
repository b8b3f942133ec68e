//! DocumentRepository trait definition.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::AppResult;
use crate::models::Document;

/// Storage operations for one collection of documents.
///
/// Every backend implements this trait so services never see the driver.
#[async_trait]
pub trait DocumentRepository<D: Document>: Send + Sync {
    /// Returns every stored document.
    async fn list_all(&self) -> AppResult<Vec<D>>;

    /// Stores a new document and returns it as persisted.
    async fn insert(&self, document: D) -> AppResult<D>;

    /// Overwrites the fields present in `patch`.
    ///
    /// Returns the updated document, or `None` when no document has `id`.
    async fn update(&self, id: ObjectId, patch: D::Patch) -> AppResult<Option<D>>;

    /// Removes a document, returning it when it existed.
    async fn delete(&self, id: ObjectId) -> AppResult<Option<D>>;
}

/// Operation labels used in database error messages, e.g. "creating the user".
pub(crate) fn operation<D: Document>(verb: &str) -> String {
    format!("{} the {}", verb, D::ENTITY.to_lowercase())
}

pub(crate) fn list_operation<D: Document>() -> String {
    format!("fetching {}s", D::ENTITY.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    #[test]
    fn test_operation_labels() {
        assert_eq!(list_operation::<User>(), "fetching users");
        assert_eq!(operation::<Role>("creating"), "creating the role");
        assert_eq!(operation::<User>("deleting"), "deleting the user");
    }
}
