//! The document-store seam every repository talks through.
//!
//! Handlers never see the MongoDB driver directly: they receive an
//! `Arc<dyn DocumentStore>` through [`crate::AppState`], and each operation
//! maps onto exactly one driver call.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use thiserror::Error;

use crate::models::{serialize_bson, serialize_optional_bson};

/// The four collections the shop keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Brands,
    Products,
    Users,
    Carts,
}

impl CollectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Brands => "brands",
            CollectionName::Products => "products",
            CollectionName::Users => "users",
            // Existing deployments store carts in the singular collection.
            CollectionName::Carts => "cart",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The deployment could not be reached (server selection, I/O, pool).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Any other fault reported by the store.
    #[error("{0}")]
    Operation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Acknowledgment of a single-document insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_bson")]
    pub inserted_id: Bson,
}

/// Acknowledgment of a single-document update, upserts included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(serialize_with = "serialize_optional_bson")]
    pub upserted_id: Option<Bson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(
        &self,
        collection: CollectionName,
        document: Document,
    ) -> StoreResult<InsertOutcome>;

    /// Every document in the collection, in natural order.
    async fn find_all(&self, collection: CollectionName) -> StoreResult<Vec<Document>>;

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<Option<Document>>;

    /// Applies `fields` with `$set` to the first match of `filter`.
    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;

    async fn delete_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<DeleteOutcome>;

    /// Liveness round-trip to the deployment.
    async fn ping(&self) -> StoreResult<()>;
}
