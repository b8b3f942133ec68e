use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Document;

/// Role record as stored in the `roles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Field values for a role that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: String,
    pub permissions: Vec<String>,
}

impl NewRole {
    /// Assigns a freshly generated id.
    pub fn into_role(self) -> Role {
        Role {
            id: ObjectId::new(),
            name: self.name,
            permissions: self.permissions,
        }
    }
}

/// Partial update for a role. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Document for Role {
    type Patch = RolePatch;

    const COLLECTION: &'static str = "roles";
    const ENTITY: &'static str = "Role";

    fn id(&self) -> ObjectId {
        self.id
    }

    fn apply(&mut self, patch: RolePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_permissions_wholesale() {
        let mut role = NewRole {
            name: "editor".to_string(),
            permissions: vec!["read".to_string(), "write".to_string()],
        }
        .into_role();
        let id = role.id;

        role.apply(RolePatch {
            name: None,
            permissions: Some(vec!["read".to_string()]),
        });

        assert_eq!(role.id, id);
        assert_eq!(role.name, "editor");
        assert_eq!(role.permissions, vec!["read".to_string()]);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut role = NewRole {
            name: "viewer".to_string(),
            permissions: vec![],
        }
        .into_role();
        let before = role.clone();
        role.apply(RolePatch::default());
        assert_eq!(role, before);
    }
}
