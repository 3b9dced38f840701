use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use brand_shop_server::{
    config::AppConfig,
    store::{
        CollectionName, DeleteOutcome, DocumentStore, InsertOutcome, StoreError, StoreResult,
        UpdateOutcome,
    },
    AppState,
};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process stand-in for MongoDB covering the operations the gateway uses:
/// equality filters on top-level fields and `$set` updates.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<CollectionName, Vec<Document>>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn documents(&self, collection: CollectionName) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: CollectionName,
        document: Document,
    ) -> StoreResult<InsertOutcome> {
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();

        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));
        if documents.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(StoreError::Operation(format!(
                "E11000 duplicate key error collection: {} dup key: {{ _id: {} }}",
                collection.as_str(),
                id
            )));
        }

        let mut stored = doc! { "_id": id.clone() };
        stored.extend(document);
        documents.push(stored);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn find_all(&self, collection: CollectionName) -> StoreResult<Vec<Document>> {
        Ok(self.documents(collection))
    }

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .documents(collection)
            .into_iter()
            .find(|d| matches_filter(d, &filter)))
    }

    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();

        if let Some(existing) = documents.iter_mut().find(|d| matches_filter(d, &filter)) {
            let modified = fields
                .iter()
                .any(|(key, value)| existing.get(key) != Some(value));
            existing.extend(fields);

            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_count: 0,
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_count: 0,
                upserted_id: None,
            });
        }

        let mut created = filter;
        if !created.contains_key("_id") {
            created.insert("_id", ObjectId::new());
        }
        created.extend(fields);
        let id = created.get("_id").cloned();
        documents.push(created);

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: id,
        })
    }

    async fn delete_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<DeleteOutcome> {
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();

        let deleted_count = match documents.iter().position(|d| matches_filter(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Store whose every call fails the way an unreachable deployment does.
#[allow(dead_code)]
pub struct UnreachableStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("Server selection timeout: No available servers".to_string())
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert_one(&self, _: CollectionName, _: Document) -> StoreResult<InsertOutcome> {
        Err(unavailable())
    }

    async fn find_all(&self, _: CollectionName) -> StoreResult<Vec<Document>> {
        Err(unavailable())
    }

    async fn find_one(&self, _: CollectionName, _: Document) -> StoreResult<Option<Document>> {
        Err(unavailable())
    }

    async fn update_one(
        &self,
        _: CollectionName,
        _: Document,
        _: Document,
        _: bool,
    ) -> StoreResult<UpdateOutcome> {
        Err(unavailable())
    }

    async fn delete_one(&self, _: CollectionName, _: Document) -> StoreResult<DeleteOutcome> {
        Err(unavailable())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unavailable())
    }
}

/// Creates a test app over a fresh, empty in-memory store
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    brand_shop_server::create_router(create_test_app_state())
}

#[allow(dead_code)]
pub fn create_test_app_state() -> AppState {
    app_state_with_store(Arc::new(MemoryStore::default()))
}

#[allow(dead_code)]
pub fn app_state_with_store(store: Arc<dyn DocumentStore>) -> AppState {
    let config = Arc::new(AppConfig {
        db_name: "brandShopTest".to_string(),
        environment: "test".to_string(),
        ..AppConfig::default()
    });

    AppState { store, config }
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
