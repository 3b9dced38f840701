use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::error::{ApiError, JsonBody};
use crate::models::{
    document_to_json, documents_to_json, json_to_document, parse_object_id,
};
use crate::products::models::ProductUpdate;
use crate::products::repository::ProductRepository;
use crate::store::{InsertOutcome, UpdateOutcome};
use crate::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(product): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let repo = ProductRepository::new(state.store.clone());
    let outcome = repo.create(json_to_document(product)).await?;
    Ok(Json(outcome))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let repo = ProductRepository::new(state.store.clone());
    let products = repo.find_all().await?;
    Ok(Json(documents_to_json(products)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Value>>, ApiError> {
    let id = parse_object_id(&id)?;

    let repo = ProductRepository::new(state.store.clone());
    let product = repo.find_by_id(id).await?;
    Ok(Json(product.map(document_to_json)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<ProductUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_object_id(&id)?;

    let repo = ProductRepository::new(state.store.clone());
    let outcome = repo.upsert(id, update).await?;

    tracing::debug!(
        product_id = %id,
        matched = outcome.matched_count,
        upserted = outcome.upserted_count,
        "Product updated"
    );

    Ok(Json(outcome))
}
