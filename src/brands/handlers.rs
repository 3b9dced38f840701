use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::brands::repository::BrandRepository;
use crate::error::{ApiError, JsonBody};
use crate::models::{document_to_json, documents_to_json, json_to_document};
use crate::store::InsertOutcome;
use crate::AppState;

pub async fn create_brand(
    State(state): State<AppState>,
    JsonBody(brand): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let repo = BrandRepository::new(state.store.clone());
    let outcome = repo.create(json_to_document(brand)).await?;
    Ok(Json(outcome))
}

pub async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let repo = BrandRepository::new(state.store.clone());
    let brands = repo.find_all().await?;
    Ok(Json(documents_to_json(brands)))
}

/// Responds with `null` when no brand carries that name.
pub async fn get_brand_by_name(
    State(state): State<AppState>,
    Path(brand_name): Path<String>,
) -> Result<Json<Option<Value>>, ApiError> {
    let repo = BrandRepository::new(state.store.clone());
    let brand = repo.find_by_name(&brand_name).await?;
    Ok(Json(brand.map(document_to_json)))
}
