pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::word_api::WordApiClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub qa_dir: Arc<PathBuf>,
    pub word_api: WordApiClient,
}

impl AppState {
    pub fn new(qa_dir: PathBuf, word_api: WordApiClient) -> Self {
        Self {
            qa_dir: Arc::new(qa_dir),
            word_api,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.qa_dir.clone(),
            WordApiClient::new(config.word_api_url.clone()),
        )
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Q&A routes
        .route("/api/qa", get(routes::qa::list))
        .route("/api/qa/{id}", get(routes::qa::detail))
        // Word routes
        .route(
            "/api/words",
            get(routes::words::lookup).post(routes::words::add),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Serving Q&A content from {}", config.qa_dir.display());
    if let Some(warning) = qa_dir_warning(&config.qa_dir) {
        tracing::warn!("{}", warning);
    }

    let state = AppState::from_config(&config);
    tracing::info!("Relaying word queries to {}", state.word_api.base_url());

    let app = router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Startup warning for a Q&A path that cannot serve content yet.
fn qa_dir_warning(path: &Path) -> Option<String> {
    if path.is_dir() {
        None
    } else if path.exists() {
        Some(format!(
            "Q&A path {} is not a directory; Q&A requests will fail",
            path.display()
        ))
    } else {
        Some(format!(
            "Q&A directory {} does not exist yet; the Q&A list will be empty",
            path.display()
        ))
    }
}

async fn health_check() -> &'static str {
    "OK"
}
