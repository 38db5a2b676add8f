//! Response DTOs for pricing API endpoints.
//!
//! Every success body is wrapped in `{ "success": true, "data": ... }`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{AddOn, AddOnKind, EmiPlan, Package, PricingBasis};

use super::emi::EmiQuote;
use super::inventory::{AvailabilityReport, Shortage};
use super::models::{Breakdown, LineItem};
use super::services::BookingConfirmation;

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Catalog listing entry
#[derive(Debug, Serialize)]
pub struct PackageSummaryResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub base_price_per_person: MoneyResponse,
    pub nights: u32,
    pub duration: String,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub highlights: Vec<String>,
}

impl From<&Package> for PackageSummaryResponse {
    fn from(p: &Package) -> Self {
        Self {
            id: p.id.clone(),
            slug: p.slug.clone(),
            title: p.title.clone(),
            subtitle: p.subtitle.clone(),
            base_price_per_person: MoneyResponse::new(p.base_price_per_person, &p.currency),
            nights: p.nights,
            duration: p.duration_label(),
            event_date: p.event_date,
            location: p.location.clone(),
            highlights: p.highlights.clone(),
        }
    }
}

/// Add-on as shown on the package page
#[derive(Debug, Serialize)]
pub struct AddOnResponse {
    pub kind: AddOnKind,
    pub name: String,
    pub price: MoneyResponse,
    pub basis: PricingBasis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
}

/// Package detail
#[derive(Debug, Serialize)]
pub struct PackageDetailResponse {
    #[serde(flatten)]
    pub summary: PackageSummaryResponse,
    pub base_name: String,
    pub add_ons: Vec<AddOnResponse>,
}

impl From<&Package> for PackageDetailResponse {
    fn from(p: &Package) -> Self {
        let add_on = |a: &AddOn| AddOnResponse {
            kind: a.kind,
            name: a.name.clone(),
            price: MoneyResponse::new(a.price, &p.currency),
            basis: a.basis(),
            remaining: p.inventory.remaining(a.kind),
        };
        Self {
            summary: PackageSummaryResponse::from(p),
            base_name: p.base_name.clone(),
            add_ons: p.add_ons.iter().map(add_on).collect(),
        }
    }
}

/// One breakdown line
#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub key: &'static str,
    pub label: String,
    pub unit_price: MoneyResponse,
    pub quantity: u32,
    pub amount: MoneyResponse,
}

impl LineItemResponse {
    fn from_line(line: &LineItem, currency: &str) -> Self {
        Self {
            key: line.key(),
            label: line.label.clone(),
            unit_price: MoneyResponse::new(line.unit_price, currency),
            quantity: line.quantity,
            amount: MoneyResponse::new(line.amount, currency),
        }
    }
}

/// Availability of the requested add-ons
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub booking_permitted: bool,
    pub shortages: Vec<Shortage>,
}

impl From<AvailabilityReport> for AvailabilityResponse {
    fn from(report: AvailabilityReport) -> Self {
        Self {
            booking_permitted: report.booking_permitted(),
            shortages: report.shortages,
        }
    }
}

/// Response for price calculation
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub package: String,
    pub travelers: u32,
    pub rooms: u32,
    pub nights: u32,
    pub base: LineItemResponse,
    pub lines: Vec<LineItemResponse>,
    pub total: MoneyResponse,
    pub availability: AvailabilityResponse,
}

impl BreakdownResponse {
    pub fn new(breakdown: &Breakdown, availability: AvailabilityReport) -> Self {
        let currency = breakdown.currency.as_str();
        Self {
            package: breakdown.package_slug.clone(),
            travelers: breakdown.travelers,
            rooms: breakdown.rooms,
            nights: breakdown.nights,
            base: LineItemResponse::from_line(&breakdown.base, currency),
            lines: breakdown
                .lines
                .iter()
                .map(|l| LineItemResponse::from_line(l, currency))
                .collect(),
            total: MoneyResponse::new(breakdown.total, currency),
            availability: availability.into(),
        }
    }
}

/// Installment plan, with the installment when a total was supplied
#[derive(Debug, Serialize)]
pub struct EmiOptionResponse {
    pub tenure_months: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub annual_rate_percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_installment: Option<MoneyResponse>,
}

impl EmiOptionResponse {
    pub fn new(plan: &EmiPlan, monthly_installment: Option<MoneyResponse>) -> Self {
        Self {
            tenure_months: plan.tenure_months,
            annual_rate_percent: plan.annual_rate_percent,
            monthly_installment,
        }
    }
}

/// Installment options for a package
#[derive(Debug, Serialize)]
pub struct EmiOptionsResponse {
    pub package: String,
    #[serde(rename = "emiOptions")]
    pub emi_options: Vec<EmiOptionResponse>,
}

/// Response for installment calculation
#[derive(Debug, Serialize)]
pub struct EmiCalculationResponse {
    pub principal: MoneyResponse,
    pub tenure_months: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub annual_rate_percent: Decimal,
    pub monthly_installment: MoneyResponse,
    pub total_interest: MoneyResponse,
    pub total_payable: MoneyResponse,
}

impl EmiCalculationResponse {
    pub fn new(quote: &EmiQuote, currency: &str) -> Self {
        Self {
            principal: MoneyResponse::new(quote.principal, currency),
            tenure_months: quote.tenure_months,
            annual_rate_percent: quote.annual_rate_percent,
            monthly_installment: MoneyResponse::new(quote.monthly_installment, currency),
            total_interest: MoneyResponse::new(quote.total_interest, currency),
            total_payable: MoneyResponse::new(quote.total_payable, currency),
        }
    }
}

/// Placeholder booking confirmation
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub reference: Uuid,
    pub package: String,
    pub travelers: u32,
    pub total: MoneyResponse,
    pub message: String,
    pub confirmed_at: DateTime<Utc>,
}

impl From<BookingConfirmation> for BookingResponse {
    fn from(c: BookingConfirmation) -> Self {
        Self {
            reference: c.reference,
            package: c.package_slug,
            travelers: c.travelers,
            total: MoneyResponse::new(c.total, &c.currency),
            message: c.message,
            confirmed_at: c.confirmed_at,
        }
    }
}
