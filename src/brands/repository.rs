use mongodb::bson::Document;
use std::sync::Arc;

use crate::store::{CollectionName, DocumentStore, InsertOutcome, StoreResult};

/// Brands are looked up by this field, not by their generated id.
pub const BRAND_NAME_FIELD: &str = "brandName";

pub struct BrandRepository {
    store: Arc<dyn DocumentStore>,
}

impl BrandRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, brand: Document) -> StoreResult<InsertOutcome> {
        self.store.insert_one(CollectionName::Brands, brand).await
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.store.find_all(CollectionName::Brands).await
    }

    /// First brand whose `brandName` equals `name`; names are not unique.
    pub async fn find_by_name(&self, name: &str) -> StoreResult<Option<Document>> {
        let mut filter = Document::new();
        filter.insert(BRAND_NAME_FIELD, name);

        self.store.find_one(CollectionName::Brands, filter).await
    }
}
