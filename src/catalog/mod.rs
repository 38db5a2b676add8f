//! Package catalog.
//!
//! The catalog is immutable reference data. It comes from a JSON file (either
//! a plain package list or the backend's product envelope) or, when no file
//! is configured, from the built-in fallback list. Load failures never crash
//! the service; they degrade to an empty catalog.

pub mod envelope;
mod fallback;
pub mod models;
pub mod slug;

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::error::AppError;

pub use envelope::{Product, ProductDefaults, ProductEnvelope};
pub use models::{AddOn, AddOnKind, EmiPlan, Inventory, Package, PricingBasis};
pub use slug::{nights_from_duration, slugify};

/// Loaded set of packages
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packages: Vec<Arc<Package>>,
}

impl Catalog {
    /// Build a catalog, filling in missing slugs from titles
    pub fn from_packages(packages: Vec<Package>) -> Self {
        let packages = packages
            .into_iter()
            .map(|mut p| {
                if p.slug.is_empty() {
                    p.slug = slugify(&p.title);
                }
                Arc::new(p)
            })
            .collect();
        Self { packages }
    }

    /// Built-in demo catalog
    pub fn fallback() -> Self {
        Self::from_packages(fallback::packages())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn find(&self, slug: &str) -> Option<Arc<Package>> {
        self.packages.iter().find(|p| p.slug == slug).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Package>> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Parse catalog JSON: a package array, or a product envelope.
pub fn parse_catalog(json: &str, defaults: &ProductDefaults) -> Result<Catalog, AppError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if value.is_array() {
        let packages: Vec<Package> = serde_json::from_value(value)?;
        return Ok(Catalog::from_packages(packages));
    }

    let envelope: ProductEnvelope = serde_json::from_value(value)?;
    if !envelope.success {
        warn!("Catalog envelope reported success=false, treating catalog as empty");
        return Ok(Catalog::empty());
    }

    Ok(Catalog::from_packages(
        envelope
            .data
            .into_iter()
            .map(|p| p.into_package(defaults))
            .collect(),
    ))
}

/// Read and parse a catalog file
pub fn read_catalog_file(path: &Path, defaults: &ProductDefaults) -> Result<Catalog, AppError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json, defaults)
}

/// Load the catalog for startup or refresh.
///
/// No path means the built-in catalog. Any read or parse failure yields an
/// empty catalog.
pub fn load_catalog(path: Option<&Path>, defaults: &ProductDefaults) -> Catalog {
    let Some(path) = path else {
        info!("No catalog file configured, using built-in catalog");
        return Catalog::fallback();
    };

    match read_catalog_file(path, defaults) {
        Ok(catalog) => {
            info!("Loaded {} packages from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            warn!("Failed to load catalog from {}: {}", path.display(), e);
            Catalog::empty()
        }
    }
}

/// Shared, swappable catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn defaults() -> ProductDefaults {
        ProductDefaults {
            insurance_per_person: dec!(400),
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn test_fallback_catalog_has_unique_slugs() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.len(), 3);
        let mut slugs: Vec<_> = catalog.iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 3);
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::fallback();
        let package = catalog.find("singapore-f1-grand-prix").unwrap();
        assert_eq!(package.base_price_per_person, dec!(25000));
        assert!(catalog.find("no-such-package").is_none());
    }

    #[test]
    fn test_parse_package_array_fills_slugs() {
        let json = r#"[{"id": "a", "title": "Abu Dhabi GP", "base_price_per_person": 1000, "nights": 1}]"#;
        let catalog = parse_catalog(json, &defaults()).unwrap();
        assert!(catalog.find("abu-dhabi-gp").is_some());
    }

    #[test]
    fn test_parse_envelope() {
        let json = r#"{"success": true, "data": [{
            "id": 1, "name": "Monaco GP", "duration": "3 Days / 2 Nights",
            "components": {"matchTickets": {"name": "Race Tickets", "price": 40000}}
        }]}"#;
        let catalog = parse_catalog(json, &defaults()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("monaco-gp").unwrap().nights, 2);
    }

    #[test]
    fn test_parse_unsuccessful_envelope_is_empty() {
        let catalog = parse_catalog(r#"{"success": false}"#, &defaults()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(parse_catalog("not json", &defaults()).is_err());
        assert!(parse_catalog(r#"{"data": []}"#, &defaults()).is_err());
    }

    #[test]
    fn test_load_catalog_without_path_uses_fallback() {
        let catalog = load_catalog(None, &defaults());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_catalog_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(Some(dir.path().join("missing.json").as_path()), &defaults());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "title": "Test Tour", "base_price_per_person": 500, "nights": 2}}]"#
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path()), &defaults());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("test-tour").is_some());
    }

    #[test]
    fn test_handle_replace_swaps_snapshot() {
        let handle = CatalogHandle::new(Catalog::fallback());
        let before = handle.snapshot();
        handle.replace(Catalog::empty());
        assert_eq!(before.len(), 3);
        assert!(handle.snapshot().is_empty());
    }
}
