use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::error::{ApiError, JsonBody};
use crate::models::{documents_to_json, json_to_document};
use crate::store::InsertOutcome;
use crate::users::repository::UserRepository;
use crate::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<Map<String, Value>>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let repo = UserRepository::new(state.store.clone());
    let outcome = repo.create(json_to_document(user)).await?;
    Ok(Json(outcome))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let repo = UserRepository::new(state.store.clone());
    let users = repo.find_all().await?;
    Ok(Json(documents_to_json(users)))
}
