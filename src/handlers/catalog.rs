use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{ApiResponse, CategorySummary, StatusSummary};
use crate::services::{category_summaries, status_summaries};
use crate::state::AppState;

/// Product counts per category
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<Vec<CategorySummary>>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategorySummary>>>> {
    let products = state.products.snapshot().await?;
    Ok(Json(ApiResponse::success(
        "Categories retrieved successfully",
        category_summaries(&products),
    )))
}

/// Product counts per status
#[utoipa::path(
    get,
    path = "/api/statuses",
    responses(
        (status = 200, description = "Statuses retrieved successfully", body = ApiResponse<Vec<StatusSummary>>)
    ),
    tag = "Catalog"
)]
pub async fn list_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<StatusSummary>>>> {
    let products = state.products.snapshot().await?;
    Ok(Json(ApiResponse::success(
        "Statuses retrieved successfully",
        status_summaries(&products),
    )))
}
