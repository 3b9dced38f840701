use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brand_shop_server::{
    config::AppConfig, create_router, database::Database, AppState, DocumentStore,
};

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env first so RUST_LOG set there reaches the filter below
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing .env file is fine; the process environment may already be set
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => info!("No .env file loaded: {}", e),
    }

    let config = Arc::new(AppConfig::load().inspect_err(|e| {
        error!("Failed to load configuration: {}", e);
    })?);
    info!("Configuration loaded successfully");

    let db = Database::connect(&config.mongo_uri, &config.db_name)
        .await
        .inspect_err(|e| error!("Error connecting to MongoDB: {}", e))?;

    // The listener only binds once the deployment answers
    db.ping()
        .await
        .inspect_err(|e| error!("Error connecting to MongoDB: {}", e))?;
    info!("Pinged deployment, connected to database '{}'", config.db_name);

    let app_state = AppState {
        store: Arc::new(db),
        config: config.clone(),
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Server is running on {}", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
