//! Product envelope format served by the booking backend.
//!
//! `{ "success": true, "data": [Product, ...] }`, where each product carries
//! its priced components under `components`. Products are converted into
//! [`Package`]s so the rest of the service only sees one shape.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{AddOn, AddOnKind, Package};
use super::slug::{nights_from_duration, slugify};

/// Envelope wrapping the product list
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Product>,
}

/// Product as delivered by the backend
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: serde_json::Value,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub components: ProductComponents,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComponents {
    pub match_tickets: Component,
    #[serde(default)]
    pub flights: Option<Component>,
    #[serde(default)]
    pub hotel: Option<Component>,
}

#[derive(Debug, Deserialize)]
pub struct Component {
    pub name: String,
    pub price: Decimal,
}

/// Values the product format does not carry
#[derive(Debug, Clone)]
pub struct ProductDefaults {
    /// Flat per-person travel insurance rate added to every product
    pub insurance_per_person: Decimal,
    pub currency: String,
}

impl Product {
    pub fn into_package(self, defaults: &ProductDefaults) -> Package {
        let id = match self.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        let nights = nights_from_duration(&self.duration).unwrap_or_else(|| {
            tracing::warn!(
                "Product '{}' has unparsable duration '{}', assuming 0 nights",
                self.name,
                self.duration
            );
            0
        });
        let event_date = self
            .event_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        let components = self.components;
        let mut highlights = vec![components.match_tickets.name.clone()];
        let mut add_ons = Vec::new();

        if let Some(flights) = components.flights {
            highlights.push(flights.name.clone());
            add_ons.push(AddOn::new(AddOnKind::Flights, flights.name, flights.price));
        }
        if let Some(hotel) = components.hotel {
            highlights.push(hotel.name.clone());
            add_ons.push(AddOn::new(AddOnKind::Hotel, hotel.name, hotel.price));
        }
        add_ons.push(AddOn::new(
            AddOnKind::Insurance,
            "Travel Insurance",
            defaults.insurance_per_person,
        ));

        if let Some(date) = &self.event_date {
            highlights.push(format!("Event Date: {}", date));
        }
        if let Some(location) = &self.location {
            highlights.push(location.clone());
        }

        Package {
            id,
            slug: slugify(&self.name),
            title: self.name,
            subtitle: self.description,
            base_name: components.match_tickets.name,
            base_price_per_person: components.match_tickets.price,
            nights,
            currency: defaults.currency.clone(),
            add_ons,
            event_date,
            location: self.location,
            highlights,
            inventory: Default::default(),
            emi_plans: Vec::new(),
        }
    }
}
