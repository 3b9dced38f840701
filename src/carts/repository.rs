use mongodb::bson::{doc, oid::ObjectId, Document};
use std::sync::Arc;

use crate::store::{CollectionName, DeleteOutcome, DocumentStore, InsertOutcome, StoreResult};

pub struct CartRepository {
    store: Arc<dyn DocumentStore>,
}

impl CartRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, cart: Document) -> StoreResult<InsertOutcome> {
        self.store.insert_one(CollectionName::Carts, cart).await
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(CollectionName::Carts).await
    }

    /// Removes at most one cart; a zero count means nothing matched.
    pub async fn delete_by_id(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        self.store
            .delete_one(CollectionName::Carts, doc! { "_id": id })
            .await
    }
}
