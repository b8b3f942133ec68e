mod document;
mod role;
mod user;

pub use document::{Document, parse_id};
pub use role::{NewRole, Role, RolePatch};
pub use user::{NewUser, User, UserPatch};
