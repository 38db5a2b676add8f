//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Package not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Booking unavailable: {}", .0.join("; "))]
    Unavailable(Vec<String>),

    #[error("Catalog I/O error: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Unavailable { shortages } => AppError::Unavailable(shortages),
            other => AppError::Validation(other.to_string()),
        }
    }
}

/// Error half of the `{ success, ... }` envelope
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_type: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string(), None),
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation",
                msg.clone(),
                None,
            ),
            AppError::Unavailable(shortages) => (
                StatusCode::CONFLICT,
                "unavailable",
                "Requested add-ons exceed remaining inventory".to_string(),
                Some(serde_json::json!({ "shortages": shortages })),
            ),
            AppError::CatalogIo(e) => {
                tracing::error!("Catalog I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "catalog",
                    "Catalog error".to_string(),
                    None,
                )
            }
            AppError::CatalogParse(e) => {
                tracing::error!("Catalog parse error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "catalog",
                    "Catalog error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorEnvelope {
            success: false,
            error: ErrorBody {
                error_type,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
