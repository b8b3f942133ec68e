//! MongoDB-backed repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::Document;
use crate::repositories::traits::{DocumentRepository, list_operation, operation};

/// Repository over the collection named by `D::COLLECTION`.
///
/// `Collection` is a cheap handle around the shared client, so cloning
/// this repository does not open new connections.
pub struct MongoRepository<D: Document> {
    collection: Collection<D>,
    _marker: PhantomData<D>,
}

impl<D: Document> MongoRepository<D> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<D>(D::COLLECTION),
            _marker: PhantomData,
        }
    }
}

impl<D: Document> Clone for MongoRepository<D> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for MongoRepository<D> {
    async fn list_all(&self) -> AppResult<Vec<D>> {
        let convert = |e: mongodb::error::Error| DatabaseErrorConverter::convert_mongo_error(e, &list_operation::<D>());

        let cursor = self.collection.find(doc! {}).await.map_err(convert)?;
        cursor.try_collect().await.map_err(convert)
    }

    async fn insert(&self, document: D) -> AppResult<D> {
        self.collection.insert_one(&document).await.map_err(|e| {
            DatabaseErrorConverter::convert_mongo_error(e, &operation::<D>("creating"))
        })?;

        Ok(document)
    }

    async fn update(&self, id: ObjectId, patch: D::Patch) -> AppResult<Option<D>> {
        let label = operation::<D>("updating");
        let set = bson::to_document(&patch).map_err(|e| AppError::Database {
            operation: label.clone(),
            source: anyhow::Error::new(e),
        })?;

        let filter = doc! { "_id": id };

        // `$set` rejects an empty document; an empty patch just reads back.
        let result = if set.is_empty() {
            self.collection.find_one(filter).await
        } else {
            self.collection
                .find_one_and_update(filter, doc! { "$set": set })
                .return_document(ReturnDocument::After)
                .await
        };

        result.map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, &label))
    }

    async fn delete(&self, id: ObjectId) -> AppResult<Option<D>> {
        self.collection
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, &operation::<D>("deleting")))
    }
}
