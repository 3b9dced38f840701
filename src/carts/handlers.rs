use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::carts::repository::CartRepository;
use crate::error::{ApiError, JsonBody};
use crate::models::{documents_to_json, json_to_document, parse_object_id};
use crate::store::{DeleteOutcome, InsertOutcome};
use crate::AppState;

pub async fn create_cart(
    State(state): State<AppState>,
    JsonBody(cart): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let repo = CartRepository::new(state.store.clone());
    let outcome = repo.create(json_to_document(cart)).await?;
    Ok(Json(outcome))
}

pub async fn list_carts(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let repo = CartRepository::new(state.store.clone());
    let carts = repo.find_all().await?;
    Ok(Json(documents_to_json(carts)))
}

pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = parse_object_id(&id)?;

    let repo = CartRepository::new(state.store.clone());
    let outcome = repo.delete_by_id(id).await?;
    Ok(Json(outcome))
}
