use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::cache::FreshnessCache;
use crate::edgar::client::SubmissionsFetcher;
use crate::edgar::filing::{self, FilingsResult};

/// Uniform failure shape. Every internal failure kind collapses into this
/// one body; callers see the same message whether the upstream was
/// unreachable or returned garbage.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub const FETCH_ERROR: &str = "Failed to fetch SEC data";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

// Shared application state, injected at router construction
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<FreshnessCache>,
    pub fetcher: Arc<dyn SubmissionsFetcher>,
}

impl AppState {
    pub fn new(cache: FreshnessCache, fetcher: Arc<dyn SubmissionsFetcher>) -> Self {
        Self {
            cache: Arc::new(cache),
            fetcher,
        }
    }
}

fn fetch_failure(cause: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: FETCH_ERROR.to_string(),
            message: cause.to_string(),
        }),
    )
}

/// `GET /api/filings`: serve the cached projection when it is still fresh,
/// otherwise fetch, project and cache a new one. Failures leave the cache
/// slot untouched.
pub async fn get_filings(
    State(state): State<AppState>,
) -> Result<Json<FilingsResult>, (StatusCode, Json<ErrorResponse>)> {
    if let Some(cached) = state.cache.try_get().await {
        log::debug!("Serving filings from cache (fetched at {})", cached.fetched_at);
        return Ok(Json(cached));
    }

    let payload = state.fetcher.fetch_raw_payload().await.map_err(|e| {
        log::error!("Upstream fetch failed: {}", e);
        fetch_failure(e)
    })?;

    let result = filing::project(payload).map_err(|e| {
        log::error!("Projection failed: {}", e);
        fetch_failure(e)
    })?;

    log::info!(
        "Refreshed filings for {}: {} matching entries",
        result.company_name,
        result.filings.len()
    );
    state.cache.store(result.clone()).await;

    Ok(Json(result))
}

/// `GET /health`: liveness probe. Never touches the cache or the upstream.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/filings", get(get_filings))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
