//! In-memory caching using moka
//!
//! Caches package lookups by slug. The catalog refresher reloads the catalog
//! file on an interval, swaps the shared snapshot and re-warms the cache.

use moka::future::Cache;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::catalog::{load_catalog, CatalogHandle, Package, ProductDefaults};

/// Application cache holding resolved packages
#[derive(Clone)]
pub struct AppCache {
    /// Packages (slug -> Package)
    pub packages: Cache<String, Arc<Package>>,
}

impl AppCache {
    /// Create a new cache instance with the default TTL
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(30 * 60))
    }

    /// Packages: 200 entries, given TTL, 10 min idle
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            packages: Cache::builder()
                .max_capacity(200)
                .time_to_live(ttl)
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            packages_size: self.packages.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.packages.invalidate_all();
        info!("All caches invalidated");
    }

    /// Insert every package of the current snapshot
    pub async fn warm(&self, catalog: &CatalogHandle) {
        let snapshot = catalog.snapshot();
        for package in snapshot.iter() {
            self.packages
                .insert(package.slug.clone(), Arc::clone(package))
                .await;
        }
        info!("Cache warmed with {} packages", snapshot.len());
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub packages_size: u64,
}

/// Start background catalog refresher
///
/// Reloads the catalog file every `every`, replaces the shared snapshot and
/// re-warms the cache. A failed reload yields an empty catalog, as at startup.
pub async fn start_catalog_refresher(
    cache: AppCache,
    catalog: CatalogHandle,
    path: PathBuf,
    defaults: ProductDefaults,
    every: Duration,
) {
    let mut interval = interval(every);
    // First tick completes immediately; startup already loaded the catalog.
    interval.tick().await;
    loop {
        interval.tick().await;
        refresh_catalog(&cache, &catalog, &path, &defaults).await;
    }
}

async fn refresh_catalog(
    cache: &AppCache,
    catalog: &CatalogHandle,
    path: &Path,
    defaults: &ProductDefaults,
) {
    info!("Refreshing catalog from {}", path.display());
    let fresh = load_catalog(Some(path), defaults);
    catalog.replace(fresh);
    cache.invalidate_all();
    cache.warm(catalog).await;
    info!("Catalog refresh complete. Stats: {:?}", cache.stats());
}
