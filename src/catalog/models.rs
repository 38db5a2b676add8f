//! Package reference data.
//!
//! Packages are immutable once loaded. Add-ons and their prices come from the
//! catalog source, never from constants in the pricing code.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional priced component a traveler can toggle on a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnKind {
    Flights,
    Hotel,
    Insurance,
    DayTrip,
    Transfers,
}

impl AddOnKind {
    /// Wire key, matching the serde representation
    pub fn key(self) -> &'static str {
        match self {
            AddOnKind::Flights => "flights",
            AddOnKind::Hotel => "hotel",
            AddOnKind::Insurance => "insurance",
            AddOnKind::DayTrip => "day_trip",
            AddOnKind::Transfers => "transfers",
        }
    }

    /// Category label used on breakdown lines
    pub fn label(self) -> &'static str {
        match self {
            AddOnKind::Flights => "Flights",
            AddOnKind::Hotel => "Hotel",
            AddOnKind::Insurance => "Insurance",
            AddOnKind::DayTrip => "Day Trip",
            AddOnKind::Transfers => "Transfers",
        }
    }

    /// How the add-on is charged when the catalog does not say
    pub fn default_basis(self) -> PricingBasis {
        match self {
            AddOnKind::Hotel => PricingBasis::PerRoom,
            _ => PricingBasis::PerPerson,
        }
    }

    /// Plural noun for the inventory unit, used in shortage messages
    pub fn inventory_unit(self) -> &'static str {
        match self {
            AddOnKind::Flights => "flight seats",
            AddOnKind::Hotel => "hotel rooms",
            AddOnKind::Insurance => "insurance policies",
            AddOnKind::DayTrip => "day-trip places",
            AddOnKind::Transfers => "transfer seats",
        }
    }
}

impl fmt::Display for AddOnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Multiplier applied to an add-on's unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    /// Unit price × travelers
    PerPerson,
    /// Unit price × rooms
    PerRoom,
    /// Unit price × rooms × nights
    PerRoomNight,
}

impl PricingBasis {
    /// Whether inventory for this basis is counted in rooms rather than travelers
    pub fn is_room_based(self) -> bool {
        matches!(self, PricingBasis::PerRoom | PricingBasis::PerRoomNight)
    }
}

/// A priced add-on offered by a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub kind: AddOnKind,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basis: Option<PricingBasis>,
}

impl AddOn {
    pub fn new(kind: AddOnKind, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            kind,
            name: name.into(),
            price,
            basis: None,
        }
    }

    pub fn with_basis(mut self, basis: PricingBasis) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn basis(&self) -> PricingBasis {
        self.basis.unwrap_or_else(|| self.kind.default_basis())
    }
}

/// Remaining quantity per add-on kind. Kinds without an entry are unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(pub BTreeMap<AddOnKind, u32>);

impl Inventory {
    pub fn remaining(&self, kind: AddOnKind) -> Option<u32> {
        self.0.get(&kind).copied()
    }

    pub fn with(mut self, kind: AddOnKind, remaining: u32) -> Self {
        self.0.insert(kind, remaining);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Monthly installment plan offered for a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiPlan {
    pub tenure_months: u32,
    pub annual_rate_percent: Decimal,
}

/// A bookable travel/event package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    /// Derived from the title at load time when absent
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Label of the base line, e.g. "Match Tickets"
    #[serde(default = "default_base_name")]
    pub base_name: String,
    pub base_price_per_person: Decimal,
    pub nights: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Inventory::is_empty")]
    pub inventory: Inventory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emi_plans: Vec<EmiPlan>,
}

fn default_base_name() -> String {
    "Package".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Package {
    pub fn add_on(&self, kind: AddOnKind) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.kind == kind)
    }

    pub fn offers(&self, kind: AddOnKind) -> bool {
        self.add_on(kind).is_some()
    }

    /// "3 days / 2 nights"
    pub fn duration_label(&self) -> String {
        format!("{} days / {} nights", self.nights + 1, self.nights)
    }
}
