//! HTTP handlers for pricing endpoints.
//!
//! Routes live under `/api/products/:slug`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::catalog::Package;
use crate::error::{AppError, Result};
use crate::AppState;

use super::emi::{calculate_emi, emi_options};
use super::inventory::check_availability;
use super::requests::{EmiCalculationRequest, EmiOptionsQuery, SelectionRequest};
use super::responses::{
    ApiResponse, AvailabilityResponse, BookingResponse, BreakdownResponse,
    EmiCalculationResponse, EmiOptionResponse, EmiOptionsResponse, MoneyResponse,
};
use super::services::{book_package, quote_package, resolve_package, validate_selection};

/// Pricing routes for a single package
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products/:slug/calculate-price", post(calculate_price))
        .route("/api/products/:slug/availability", post(availability))
        .route("/api/products/:slug/emi-options", get(emi_options_handler))
        .route("/api/products/:slug/emi-calculation", post(emi_calculation))
        .route("/api/products/:slug/book", post(book))
}

async fn package_or_404(state: &AppState, slug: &str) -> Result<Arc<Package>> {
    resolve_package(&state.cache, &state.catalog, slug)
        .await
        .ok_or(AppError::NotFound)
}

/// Price breakdown for a selection
async fn calculate_price(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<ApiResponse<BreakdownResponse>>> {
    let package = package_or_404(&state, &slug).await?;
    let selection = request.into_selection();

    let breakdown = quote_package(&package, &selection)?;
    let availability = check_availability(&package, &selection);
    tracing::debug!(
        "Priced {} for {} travelers: total {}",
        slug,
        breakdown.travelers,
        breakdown.total
    );

    Ok(Json(ApiResponse::ok(BreakdownResponse::new(
        &breakdown,
        availability,
    ))))
}

/// Inventory check for a selection
async fn availability(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>> {
    let package = package_or_404(&state, &slug).await?;
    let selection = request.into_selection();
    validate_selection(&package, &selection)?;

    let report = check_availability(&package, &selection);
    Ok(Json(ApiResponse::ok(report.into())))
}

/// Installment plans, optionally previewed for a total
async fn emi_options_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<EmiOptionsQuery>,
) -> Result<Json<ApiResponse<EmiOptionsResponse>>> {
    let package = package_or_404(&state, &slug).await?;

    let options = emi_options(&package)
        .iter()
        .map(|plan| -> Result<EmiOptionResponse> {
            let installment = match query.total {
                Some(total) => {
                    let quote =
                        calculate_emi(total, plan.tenure_months, plan.annual_rate_percent)?;
                    Some(MoneyResponse::new(quote.monthly_installment, &package.currency))
                }
                None => None,
            };
            Ok(EmiOptionResponse::new(plan, installment))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(ApiResponse::ok(EmiOptionsResponse {
        package: package.slug.clone(),
        emi_options: options,
    })))
}

/// Installment for a total over one of the package's tenures
async fn emi_calculation(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<EmiCalculationRequest>,
) -> Result<Json<ApiResponse<EmiCalculationResponse>>> {
    let package = package_or_404(&state, &slug).await?;

    let plan = emi_options(&package)
        .into_iter()
        .find(|p| p.tenure_months == request.tenure_months)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "No installment plan with tenure {} months for {}",
                request.tenure_months, package.slug
            ))
        })?;

    let quote = calculate_emi(
        request.total_amount,
        plan.tenure_months,
        plan.annual_rate_percent,
    )?;

    Ok(Json(ApiResponse::ok(EmiCalculationResponse::new(
        &quote,
        &package.currency,
    ))))
}

/// Placeholder booking
async fn book(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>> {
    let package = package_or_404(&state, &slug).await?;
    let selection = request.into_selection();

    let confirmation = book_package(&package, &selection)?;
    Ok(Json(ApiResponse::ok(confirmation.into())))
}
