use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travelgenie_web::cache::start_catalog_refresher;
use travelgenie_web::catalog::load_catalog;
use travelgenie_web::config::Config;
use travelgenie_web::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelgenie_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    let defaults = config.product_defaults();
    let catalog = load_catalog(config.catalog_path.as_deref(), &defaults);

    let state = AppState::new(config.clone(), catalog);
    state.cache.warm(&state.catalog).await;

    if let Some(path) = config.catalog_path.clone() {
        if config.catalog_refresh_secs > 0 {
            tokio::spawn(start_catalog_refresher(
                state.cache.clone(),
                state.catalog.clone(),
                path,
                defaults,
                Duration::from_secs(config.catalog_refresh_secs),
            ));
        }
    }

    let app = routes::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
