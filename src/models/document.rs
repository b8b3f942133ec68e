//! Common behaviour of records stored in the document database.

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, AppResult};

/// A record living in its own collection, keyed by a generated `_id`.
///
/// Both repository backends are generic over this trait, so adding a
/// collection means adding a model, not a repository.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Partial update for this record. Every field is optional and only
    /// present fields overwrite the stored value.
    type Patch: Serialize + Clone + Send + Sync + 'static;

    /// Collection name in the database.
    const COLLECTION: &'static str;

    /// Entity name used in messages, e.g. "User".
    const ENTITY: &'static str;

    fn id(&self) -> ObjectId;

    /// Applies a patch in place.
    fn apply(&mut self, patch: Self::Patch);
}

/// Parses a path identifier into an ObjectId for the given document type.
pub fn parse_id<D: Document>(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {} id '{}'", D::ENTITY.to_lowercase(), raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    #[test]
    fn test_parse_id_valid() {
        let id = ObjectId::new();
        assert_eq!(parse_id::<User>(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_invalid() {
        let err = parse_id::<Role>("not-an-id").unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert!(message.contains("role id"));
                assert!(message.contains("not-an-id"));
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
