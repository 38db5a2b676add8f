//! Health and cache monitoring handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::pricing::responses::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub packages: usize,
    pub catalog_source: String,
}

/// Liveness plus catalog size. An empty catalog is still healthy.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        packages: state.catalog.snapshot().len(),
        catalog_source: state
            .config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
    })
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<ApiResponse<CacheStats>> {
    Json(ApiResponse::ok(state.cache.stats()))
}
