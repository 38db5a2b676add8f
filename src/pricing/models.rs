//! Selection and breakdown value types.
//!
//! A [`Selection`] is what the traveler picked; a [`Breakdown`] is what it
//! costs. Both are plain values recomputed on every change.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::catalog::AddOnKind;

use super::calculators::compute_rooms;

/// Traveler choices for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub travelers: u32,
    pub add_ons: BTreeSet<AddOnKind>,
    /// Manual room count; `None` or `Some(0)` means derive from travelers
    pub room_override: Option<u32>,
}

impl Selection {
    pub fn new(travelers: u32) -> Self {
        Self {
            travelers,
            add_ons: BTreeSet::new(),
            room_override: None,
        }
    }

    pub fn with_add_on(mut self, kind: AddOnKind) -> Self {
        self.add_ons.insert(kind);
        self
    }

    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.room_override = Some(rooms);
        self
    }

    /// Flip an add-on flag, returning whether it is now active
    pub fn toggle(&mut self, kind: AddOnKind) -> bool {
        if self.add_ons.remove(&kind) {
            false
        } else {
            self.add_ons.insert(kind);
            true
        }
    }

    pub fn is_active(&self, kind: AddOnKind) -> bool {
        self.add_ons.contains(&kind)
    }

    /// Effective room count: a positive override wins, otherwise ceil(travelers / 2)
    pub fn rooms(&self) -> u32 {
        match self.room_override {
            Some(rooms) if rooms > 0 => rooms,
            _ => compute_rooms(self.travelers),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(2)
    }
}

/// One itemized charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// `None` for the base line
    pub kind: Option<AddOnKind>,
    pub label: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub amount: Decimal,
}

impl LineItem {
    pub fn key(&self) -> &'static str {
        self.kind.map(AddOnKind::key).unwrap_or("base")
    }
}

/// Itemized price for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub package_slug: String,
    pub currency: String,
    pub travelers: u32,
    pub rooms: u32,
    pub nights: u32,
    pub base: LineItem,
    /// Active add-ons only, in add-on order
    pub lines: Vec<LineItem>,
    pub total: Decimal,
}

impl Breakdown {
    pub fn line(&self, kind: AddOnKind) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.kind == Some(kind))
    }

    /// Amount charged for an add-on, zero when inactive
    pub fn amount_for(&self, kind: AddOnKind) -> Decimal {
        self.line(kind).map(|l| l.amount).unwrap_or(Decimal::ZERO)
    }

    pub fn add_ons_total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_derived_from_travelers() {
        assert_eq!(Selection::new(5).rooms(), 3);
    }

    #[test]
    fn test_room_override_may_go_below_derived() {
        assert_eq!(Selection::new(6).with_rooms(1).rooms(), 1);
        assert_eq!(Selection::new(2).with_rooms(4).rooms(), 4);
    }

    #[test]
    fn test_zero_room_override_is_ignored() {
        assert_eq!(Selection::new(6).with_rooms(0).rooms(), 3);
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::default();
        assert!(selection.toggle(AddOnKind::Hotel));
        assert!(selection.is_active(AddOnKind::Hotel));
        assert!(!selection.toggle(AddOnKind::Hotel));
        assert!(!selection.is_active(AddOnKind::Hotel));
    }
}
