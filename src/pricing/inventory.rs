//! Add-on availability check.
//!
//! Compares what an active add-on needs (travelers, or rooms for room-based
//! add-ons) with the package's remaining inventory. Shortages are advisory:
//! they block booking but are never raised as errors here.

use serde::Serialize;

use crate::catalog::{AddOnKind, Package};

use super::models::Selection;

/// One add-on whose remaining inventory cannot cover the selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortage {
    pub kind: AddOnKind,
    pub requested: u32,
    pub remaining: u32,
    pub message: String,
}

/// Result of an availability check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub shortages: Vec<Shortage>,
}

impl AvailabilityReport {
    pub fn booking_permitted(&self) -> bool {
        self.shortages.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.shortages.iter().map(|s| s.message.clone()).collect()
    }
}

/// Check every active add-on against the package inventory
pub fn check_availability(package: &Package, selection: &Selection) -> AvailabilityReport {
    let travelers = selection.travelers;
    let rooms = selection.rooms();

    let shortages = package
        .add_ons
        .iter()
        .filter(|a| selection.is_active(a.kind))
        .filter_map(|a| {
            let remaining = package.inventory.remaining(a.kind)?;
            let (requested, unit) = if a.basis().is_room_based() {
                (rooms, if rooms == 1 { "room" } else { "rooms" })
            } else {
                (travelers, if travelers == 1 { "traveler" } else { "travelers" })
            };
            if requested <= remaining {
                return None;
            }
            Some(Shortage {
                kind: a.kind,
                requested,
                remaining,
                message: format!(
                    "Only {} {} left for {}, {} {} requested",
                    remaining,
                    a.kind.inventory_unit(),
                    a.name,
                    requested,
                    unit
                ),
            })
        })
        .collect();

    AvailabilityReport { shortages }
}
