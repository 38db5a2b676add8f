//! HTTP router assembly

pub mod catalog;
pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::pricing;
use crate::AppState;

/// Build the application router with all routes and layers
pub fn app(state: AppState) -> Router {
    // The booking front-end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/products", get(catalog::list))
        .route("/api/products/:slug", get(catalog::detail))
        .route("/api/cache/stats", get(health::cache_stats))
        .merge(pricing::router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
