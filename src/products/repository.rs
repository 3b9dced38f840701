use mongodb::bson::{doc, oid::ObjectId, Document};
use std::sync::Arc;

use crate::products::models::ProductUpdate;
use crate::store::{CollectionName, DocumentStore, InsertOutcome, StoreResult, UpdateOutcome};

pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, product: Document) -> StoreResult<InsertOutcome> {
        self.store.insert_one(CollectionName::Products, product).await
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(CollectionName::Products).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        self.store
            .find_one(CollectionName::Products, doc! { "_id": id })
            .await
    }

    /// Overwrites the product's field set, creating the product under `id`
    /// when it does not exist yet.
    pub async fn upsert(&self, id: ObjectId, update: ProductUpdate) -> StoreResult<UpdateOutcome> {
        self.store
            .update_one(
                CollectionName::Products,
                doc! { "_id": id },
                update.into_set_fields(),
                true,
            )
            .await
    }
}
