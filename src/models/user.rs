use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Document;

/// User record as stored in the `users` collection.
///
/// `roles` holds free-form strings and is never checked against the
/// `roles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Field values for a user that has not been stored yet.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub status: Option<String>,
}

impl NewUser {
    /// Assigns a freshly generated id.
    pub fn into_user(self) -> User {
        User {
            id: ObjectId::new(),
            name: self.name,
            email: self.email,
            roles: self.roles,
            status: self.status,
        }
    }
}

/// Partial update for a user.
///
/// `None` leaves the stored field untouched. `Some(None)` clears it and is
/// written to the `$set` document as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
}

impl Document for User {
    type Patch = UserPatch;

    const COLLECTION: &'static str = "users";
    const ENTITY: &'static str = "User";

    fn id(&self) -> ObjectId {
        self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(roles) = patch.roles {
            self.roles = roles;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use proptest::prelude::*;

    fn sample_user() -> User {
        NewUser {
            name: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            roles: vec!["admin".to_string()],
            status: Some("active".to_string()),
        }
        .into_user()
    }

    #[test]
    fn test_into_user_generates_distinct_ids() {
        let a = NewUser::default().into_user();
        let b = NewUser::default().into_user();
        assert_ne!(a.id, b.id);
        assert!(a.roles.is_empty());
    }

    #[test]
    fn test_apply_only_overwrites_present_fields() {
        let mut user = sample_user();
        user.apply(UserPatch {
            status: Some(Some("disabled".to_string())),
            ..Default::default()
        });

        assert_eq!(user.status.as_deref(), Some("disabled"));
        assert_eq!(user.name.as_deref(), Some("alice"));
        assert_eq!(user.roles, vec!["admin".to_string()]);
    }

    #[test]
    fn test_apply_clears_field_set_to_null() {
        let mut user = sample_user();
        user.apply(UserPatch {
            email: Some(None),
            ..Default::default()
        });

        assert!(user.email.is_none());
        assert_eq!(user.name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = UserPatch {
            email: Some(Some("new@example.com".to_string())),
            status: Some(None),
            ..Default::default()
        };
        let doc = bson::to_document(&patch).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_str("email").unwrap(), "new@example.com");
        assert_eq!(doc.get("status"), Some(&bson::Bson::Null));

        assert!(bson::to_document(&UserPatch::default()).unwrap().is_empty());
    }

    #[test]
    fn test_stored_document_uses_underscore_id_and_skips_absent_fields() {
        let user = NewUser::default().into_user();
        let doc = bson::to_document(&user).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), user.id);
        assert!(!doc.contains_key("name"));
        assert!(doc.get_array("roles").unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_document_without_roles() {
        let id = bson::oid::ObjectId::new();
        let doc = bson::doc! { "_id": id, "name": "bob" };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.id, id);
        assert!(user.roles.is_empty());
        assert!(user.email.is_none());
    }

    proptest! {
        #[test]
        fn prop_apply_keeps_id_and_absent_fields(
            name in proptest::option::of("[a-z]{1,10}"),
            status in proptest::option::of("[a-z]{1,10}"),
        ) {
            let original = sample_user();
            let mut user = original.clone();
            user.apply(UserPatch {
                name: name.clone().map(Some),
                email: None,
                roles: None,
                status: status.clone().map(Some),
            });

            prop_assert_eq!(user.id, original.id);
            prop_assert_eq!(&user.email, &original.email);
            prop_assert_eq!(&user.roles, &original.roles);
            prop_assert_eq!(user.name, name.or(original.name));
            prop_assert_eq!(user.status, status.or(original.status));
        }
    }
}
