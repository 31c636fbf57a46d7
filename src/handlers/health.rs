use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthStatus>)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(
        "Service is healthy",
        HealthStatus {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route".to_string())
}
