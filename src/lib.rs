//! TravelGenie package pricing service.
//!
//! Serves the package catalog and prices traveler selections: base fare,
//! toggled add-ons, derived room count, inventory checks and installment
//! plans.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use cache::AppCache;
use catalog::{Catalog, CatalogHandle};
use config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogHandle,
    pub cache: AppCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            catalog: CatalogHandle::new(catalog),
            cache: AppCache::with_ttl(config.cache_ttl()),
            config: Arc::new(config),
        }
    }
}
