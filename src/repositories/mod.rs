//! Repository layer for data access operations.
//!
//! One generic trait, two backends: MongoDB and an in-memory map.

mod memory;
mod mongo;
mod traits;

pub use memory::MemoryRepository;
pub use mongo::MongoRepository;
pub use traits::DocumentRepository;

use std::sync::Arc;

use mongodb::Database;

use crate::config::{DatabaseConfig, StorageBackend};
use crate::db;
use crate::error::AppResult;
use crate::models::{Role, User};

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn DocumentRepository<User>>,
    pub roles: Arc<dyn DocumentRepository<Role>>,
}

impl Repositories {
    /// Repositories backed by the given MongoDB database.
    pub fn mongo(database: &Database) -> Self {
        Self {
            users: Arc::new(MongoRepository::<User>::new(database)),
            roles: Arc::new(MongoRepository::<Role>::new(database)),
        }
    }

    /// Repositories kept in process memory.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<User>::new()),
            roles: Arc::new(MemoryRepository::<Role>::new()),
        }
    }

    /// Builds the backend selected by `database.backend`, connecting first
    /// when it is MongoDB.
    pub async fn for_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Mongodb => {
                let database = db::connect(config).await?;
                Ok(Self::mongo(&database))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }
}
