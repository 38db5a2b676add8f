//! Pricing service functions over catalog lookups.
//!
//! These sit between the HTTP handlers and the pure calculators: package
//! resolution through the cache, selection validation, and the booking
//! placeholder.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::catalog::{AddOnKind, CatalogHandle, Package};

use super::calculators::compute_breakdown;
use super::format::format_money;
use super::inventory::check_availability;
use super::models::{Breakdown, Selection};

/// Pricing calculation error types
#[derive(Debug, Clone)]
pub enum PricingError {
    UnknownAddOn {
        package: String,
        kinds: Vec<AddOnKind>,
    },
    InvalidTenure {
        tenure_months: u32,
    },
    InvalidAmount {
        amount: Decimal,
    },
    InvalidRate {
        rate: Decimal,
    },
    Unavailable {
        shortages: Vec<String>,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::UnknownAddOn { package, kinds } => {
                let kinds: Vec<&str> = kinds.iter().map(|k| k.key()).collect();
                write!(f, "Package {} does not offer add-ons: {}", package, kinds.join(", "))
            }
            PricingError::InvalidTenure { tenure_months } => {
                write!(f, "Tenure must be at least one month, got {}", tenure_months)
            }
            PricingError::InvalidAmount { amount } => {
                write!(f, "Amount must not be negative, got {}", amount)
            }
            PricingError::InvalidRate { rate } => {
                write!(f, "Interest rate must not be negative, got {}", rate)
            }
            PricingError::Unavailable { shortages } => {
                write!(f, "Booking unavailable: {}", shortages.join("; "))
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result of the placeholder booking action
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub package_slug: String,
    pub travelers: u32,
    pub total: Decimal,
    pub currency: String,
    pub message: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Resolve a package by slug, cache first.
///
/// Misses fall through to the current catalog snapshot and populate the cache.
pub async fn resolve_package(
    cache: &AppCache,
    catalog: &CatalogHandle,
    slug: &str,
) -> Option<Arc<Package>> {
    if let Some(cached) = cache.packages.get(slug).await {
        tracing::debug!("Cache HIT for package: {}", slug);
        return Some(cached);
    }

    tracing::debug!("Cache MISS for package: {}", slug);
    let package = catalog.snapshot().find(slug)?;
    cache
        .packages
        .insert(slug.to_string(), Arc::clone(&package))
        .await;
    Some(package)
}

/// Reject add-on flags the package does not offer
pub fn validate_selection(package: &Package, selection: &Selection) -> Result<(), PricingError> {
    let unknown: Vec<AddOnKind> = selection
        .add_ons
        .iter()
        .copied()
        .filter(|k| !package.offers(*k))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(PricingError::UnknownAddOn {
            package: package.slug.clone(),
            kinds: unknown,
        })
    }
}

/// Validate then price a selection
pub fn quote_package(package: &Package, selection: &Selection) -> Result<Breakdown, PricingError> {
    validate_selection(package, selection)?;
    Ok(compute_breakdown(package, selection))
}

/// Placeholder booking: checks inventory and returns a local confirmation.
///
/// Nothing is stored; the reference is random.
pub fn book_package(
    package: &Package,
    selection: &Selection,
) -> Result<BookingConfirmation, PricingError> {
    let breakdown = quote_package(package, selection)?;

    let report = check_availability(package, selection);
    if !report.booking_permitted() {
        return Err(PricingError::Unavailable {
            shortages: report.messages(),
        });
    }

    let message = format!(
        "Booking {} for {} travelers → Total {}",
        package.title,
        breakdown.travelers,
        format_money(breakdown.total, &breakdown.currency)
    );
    tracing::info!("{}", message);

    Ok(BookingConfirmation {
        reference: Uuid::new_v4(),
        package_slug: package.slug.clone(),
        travelers: breakdown.travelers,
        total: breakdown.total,
        currency: breakdown.currency,
        message,
        confirmed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal_macros::dec;

    fn singapore() -> Arc<Package> {
        Catalog::fallback().find("singapore-f1-grand-prix").unwrap()
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::UnknownAddOn {
            package: "singapore-f1-grand-prix".to_string(),
            kinds: vec![AddOnKind::DayTrip, AddOnKind::Transfers],
        };
        assert_eq!(
            err.to_string(),
            "Package singapore-f1-grand-prix does not offer add-ons: day_trip, transfers"
        );

        let err = PricingError::InvalidTenure { tenure_months: 0 };
        assert!(err.to_string().contains("at least one month"));

        let err = PricingError::Unavailable {
            shortages: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "Booking unavailable: a; b");
    }

    #[test]
    fn test_quote_rejects_unoffered_add_on() {
        let selection = Selection::new(2).with_add_on(AddOnKind::DayTrip);
        let err = quote_package(&singapore(), &selection).unwrap_err();
        assert!(matches!(err, PricingError::UnknownAddOn { .. }));
    }

    #[test]
    fn test_quote_prices_valid_selection() {
        let selection = Selection::new(3).with_add_on(AddOnKind::Flights);
        let breakdown = quote_package(&singapore(), &selection).unwrap();
        assert_eq!(breakdown.total, dec!(111000));
    }

    #[test]
    fn test_book_package_confirmation_message() {
        let selection = Selection::new(3).with_add_on(AddOnKind::Flights);
        let confirmation = book_package(&singapore(), &selection).unwrap();
        assert_eq!(
            confirmation.message,
            "Booking Singapore F1 Grand Prix for 3 travelers → Total ₹1,11,000"
        );
        assert_eq!(confirmation.total, dec!(111000));
    }

    #[test]
    fn test_book_package_blocked_by_shortage() {
        let selection = Selection::new(11).with_add_on(AddOnKind::Flights);
        let err = book_package(&singapore(), &selection).unwrap_err();
        match err {
            PricingError::Unavailable { shortages } => assert_eq!(shortages.len(), 1),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_package_populates_cache() {
        let cache = AppCache::new();
        let catalog = CatalogHandle::new(Catalog::fallback());

        let first = resolve_package(&cache, &catalog, "singapore-f1-grand-prix")
            .await
            .unwrap();
        assert!(cache.packages.get("singapore-f1-grand-prix").await.is_some());

        catalog.replace(Catalog::empty());
        let second = resolve_package(&cache, &catalog, "singapore-f1-grand-prix")
            .await
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        assert!(resolve_package(&cache, &catalog, "missing").await.is_none());
    }
}
