//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::catalog::{AddOn, Package, PricingBasis};

use super::format::format_money;
use super::models::{Breakdown, LineItem, Selection};

/// Smallest traveler count per booking
pub const MIN_TRAVELERS: u32 = 1;
/// Largest traveler count per booking
pub const MAX_TRAVELERS: u32 = 8;
/// Largest manual room override; one room per traveler at most
pub const MAX_ROOMS: u32 = MAX_TRAVELERS;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use travelgenie_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Rooms needed for a party: one room per two travelers, rounding up.
///
/// Counts below one are treated as one, so the result is never zero.
///
/// ```
/// use travelgenie_web::pricing::compute_rooms;
///
/// assert_eq!(compute_rooms(1), 1);
/// assert_eq!(compute_rooms(2), 1);
/// assert_eq!(compute_rooms(3), 2);
/// assert_eq!(compute_rooms(8), 4);
/// ```
pub fn compute_rooms(travelers: u32) -> u32 {
    travelers.max(MIN_TRAVELERS).div_ceil(2)
}

/// Clamp a requested traveler count into the bookable range
pub fn clamp_travelers(travelers: u32) -> u32 {
    travelers.clamp(MIN_TRAVELERS, MAX_TRAVELERS)
}

/// Clamp a manual room override into `[1, MAX_ROOMS]`; zero means no override
pub fn clamp_room_override(rooms: Option<u32>) -> Option<u32> {
    rooms.filter(|r| *r > 0).map(|r| r.min(MAX_ROOMS))
}

/// Units an add-on is charged for under its basis. Saturates rather than wraps.
pub fn billable_quantity(basis: PricingBasis, travelers: u32, rooms: u32, nights: u32) -> u32 {
    match basis {
        PricingBasis::PerPerson => travelers,
        PricingBasis::PerRoom => rooms,
        PricingBasis::PerRoomNight => rooms.saturating_mul(nights),
    }
}

fn add_on_label(add_on: &AddOn, travelers: u32, rooms: u32, nights: u32, currency: &str) -> String {
    let name = add_on.kind.label();
    let price = format_money(add_on.price, currency);
    match add_on.basis() {
        PricingBasis::PerPerson => format!("{} ({} × {})", name, travelers, price),
        PricingBasis::PerRoom => format!("{} ({} rooms × {})", name, rooms, price),
        PricingBasis::PerRoomNight => {
            format!("{} ({} rooms × {} nights × {})", name, rooms, nights, price)
        }
    }
}

/// Compute the itemized price of a selection.
///
/// The base line is the per-person base price times travelers. Every add-on
/// the package offers and the selection activates contributes one line;
/// flags for add-ons the package does not offer are ignored. The total is the
/// base plus the sum of the active lines.
pub fn compute_breakdown(package: &Package, selection: &Selection) -> Breakdown {
    let travelers = selection.travelers;
    let rooms = selection.rooms();
    let nights = package.nights;
    let currency = package.currency.as_str();

    let base = LineItem {
        kind: None,
        label: format!(
            "{} ({} × {})",
            package.base_name,
            travelers,
            format_money(package.base_price_per_person, currency)
        ),
        unit_price: package.base_price_per_person,
        quantity: travelers,
        amount: package.base_price_per_person * Decimal::from(travelers),
    };

    let lines: Vec<LineItem> = package
        .add_ons
        .iter()
        .filter(|a| selection.is_active(a.kind))
        .map(|a| {
            let quantity = billable_quantity(a.basis(), travelers, rooms, nights);
            LineItem {
                kind: Some(a.kind),
                label: add_on_label(a, travelers, rooms, nights, currency),
                unit_price: a.price,
                quantity,
                amount: a.price * Decimal::from(quantity),
            }
        })
        .collect();

    let total = base.amount + lines.iter().map(|l| l.amount).sum::<Decimal>();

    Breakdown {
        package_slug: package.slug.clone(),
        currency: package.currency.clone(),
        travelers,
        rooms,
        nights,
        base,
        lines,
        total,
    }
}
