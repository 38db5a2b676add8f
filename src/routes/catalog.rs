//! Catalog route handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::pricing::responses::{ApiResponse, PackageDetailResponse, PackageSummaryResponse};
use crate::pricing::services::resolve_package;
use crate::AppState;

/// Package listing
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<PackageSummaryResponse>>> {
    let catalog = state.catalog.snapshot();
    let packages = catalog
        .iter()
        .map(|p| PackageSummaryResponse::from(p.as_ref()))
        .collect();

    Json(ApiResponse::ok(packages))
}

/// Package detail by slug
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PackageDetailResponse>>> {
    let package = resolve_package(&state.cache, &state.catalog, &slug)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(ApiResponse::ok(PackageDetailResponse::from(
        package.as_ref(),
    ))))
}
