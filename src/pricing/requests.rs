//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::AddOnKind;

use super::calculators::{clamp_room_override, clamp_travelers};
use super::models::Selection;

fn default_travelers() -> u32 {
    2
}

/// Traveler selection sent by the package page
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub add_ons: Vec<AddOnKind>,
    /// Manual room override
    #[serde(default)]
    pub rooms: Option<u32>,
}

impl SelectionRequest {
    /// Build a selection, clamping travelers and the room override into range
    pub fn into_selection(self) -> Selection {
        let travelers = clamp_travelers(self.travelers);
        if travelers != self.travelers {
            tracing::debug!("Clamped travelers {} -> {}", self.travelers, travelers);
        }
        let room_override = clamp_room_override(self.rooms);
        if room_override.is_some() && room_override != self.rooms {
            tracing::debug!("Clamped room override {:?} -> {:?}", self.rooms, room_override);
        }
        Selection {
            travelers,
            add_ons: self.add_ons.into_iter().collect(),
            room_override,
        }
    }
}

/// Query for installment options; a total previews each plan's installment
#[derive(Debug, Deserialize)]
pub struct EmiOptionsQuery {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total: Option<Decimal>,
}

/// Request to calculate an installment
#[derive(Debug, Deserialize)]
pub struct EmiCalculationRequest {
    #[serde(alias = "totalAmount")]
    pub total_amount: Decimal,
    #[serde(alias = "tenure")]
    pub tenure_months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_request_defaults() {
        let request: SelectionRequest = serde_json::from_str("{}").unwrap();
        let selection = request.into_selection();
        assert_eq!(selection.travelers, 2);
        assert!(selection.add_ons.is_empty());
        assert_eq!(selection.room_override, None);
    }

    #[test]
    fn test_selection_request_clamps_travelers() {
        let request: SelectionRequest =
            serde_json::from_str(r#"{"travelers": 20, "add_ons": ["flights", "hotel", "flights"]}"#)
                .unwrap();
        let selection = request.into_selection();
        assert_eq!(selection.travelers, 8);
        assert_eq!(selection.add_ons.len(), 2);

        let request: SelectionRequest = serde_json::from_str(r#"{"travelers": 0}"#).unwrap();
        assert_eq!(request.into_selection().travelers, 1);
    }

    #[test]
    fn test_selection_request_clamps_room_override() {
        let request: SelectionRequest =
            serde_json::from_str(r#"{"travelers": 2, "rooms": 1073741824}"#).unwrap();
        assert_eq!(request.into_selection().room_override, Some(8));

        let request: SelectionRequest = serde_json::from_str(r#"{"rooms": 0}"#).unwrap();
        assert_eq!(request.into_selection().room_override, None);
    }

    #[test]
    fn test_selection_request_rejects_unknown_add_on() {
        let result = serde_json::from_str::<SelectionRequest>(r#"{"add_ons": ["spa"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_emi_request_accepts_frontend_field_names() {
        let request: EmiCalculationRequest =
            serde_json::from_str(r#"{"totalAmount": 111000, "tenure": 6}"#).unwrap();
        assert_eq!(request.total_amount, Decimal::from(111000));
        assert_eq!(request.tenure_months, 6);
    }
}
