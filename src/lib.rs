use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

pub mod brands;
pub mod carts;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod products;
pub mod store;
pub mod users;

pub use config::AppConfig;
pub use database::Database;
pub use error::ApiError;
pub use store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<AppConfig>,
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/brands",
            get(brands::list_brands).post(brands::create_brand),
        )
        .route("/brands/:brand_name", get(brands::get_brand_by_name))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product).put(products::update_product),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/carts", get(carts::list_carts).post(carts::create_cart))
        .route("/carts/:id", delete(carts::delete_cart))
        .fallback(not_found_handler)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}

async fn root_handler() -> &'static str {
    "This is Brand Shop server!"
}

async fn health_handler(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    match state.store.ping().await {
        Ok(_) => Ok("OK"),
        Err(e) => {
            warn!(database = %state.config.db_name, "Health check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
