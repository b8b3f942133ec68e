//! In-memory repository using DashMap.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use crate::error::AppResult;
use crate::models::Document;
use crate::repositories::traits::DocumentRepository;

/// Process-local store, contents are lost on restart.
pub struct MemoryRepository<D: Document> {
    store: DashMap<ObjectId, D>,
}

impl<D: Document> MemoryRepository<D> {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }
}

impl<D: Document> Default for MemoryRepository<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for MemoryRepository<D> {
    /// Ordered by id, which is insertion order for generated ids.
    async fn list_all(&self) -> AppResult<Vec<D>> {
        let mut documents: Vec<D> = self.store.iter().map(|entry| entry.value().clone()).collect();
        documents.sort_by_key(|document| document.id());
        Ok(documents)
    }

    async fn insert(&self, document: D) -> AppResult<D> {
        self.store.insert(document.id(), document.clone());
        Ok(document)
    }

    async fn update(&self, id: ObjectId, patch: D::Patch) -> AppResult<Option<D>> {
        Ok(self.store.get_mut(&id).map(|mut entry| {
            entry.apply(patch);
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: ObjectId) -> AppResult<Option<D>> {
        Ok(self.store.remove(&id).map(|(_, document)| document))
    }
}
