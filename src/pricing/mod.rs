//! Pricing engine module.
//!
//! Turns a package plus a traveler selection into an itemized breakdown,
//! checks add-on inventory, and quotes installment plans.

pub mod calculators;
pub mod emi;
pub mod format;
pub mod inventory;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    clamp_room_override, clamp_travelers, compute_breakdown, compute_rooms, round_money,
};
pub use format::format_money;
pub use inventory::{check_availability, AvailabilityReport, Shortage};
pub use models::{Breakdown, LineItem, Selection};
pub use routes::router;
pub use services::{BookingConfirmation, PricingError};
