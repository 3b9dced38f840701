use mongodb::bson::Document;
use std::sync::Arc;

use crate::store::{CollectionName, DocumentStore, InsertOutcome, StoreResult};

pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, user: Document) -> StoreResult<InsertOutcome> {
        self.store.insert_one(CollectionName::Users, user).await
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(CollectionName::Users).await
    }
}
