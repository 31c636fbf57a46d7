use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppResult;
use crate::extractors::{JsonBody, QueryParams};
use crate::models::{
    ApiResponse, Pagination, Product, ProductDraft, ProductFilters, ProductPage, ProductPatch,
    ProductSort, ProductStatus, SortField, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
use crate::state::AppState;

// ============ Request DTOs ============

/// Listing query string. Empty values are treated as absent. Category and
/// search terms are matched as sent, surrounding whitespace included.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// 1-indexed page number
    #[param(default = 1, minimum = 1)]
    pub page: Option<i64>,
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    /// One of name, price, stockQuantity, createdAt, updatedAt
    #[param(default = "createdAt")]
    pub sort_by: Option<String>,
    /// asc or desc
    #[param(default = "desc")]
    pub sort_order: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// active, inactive or discontinued
    pub status: Option<String>,
    /// Case-insensitive match on name, vendor or category
    pub search: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ListProductsQuery {
    /// Validate and convert into the listing inputs
    pub fn into_parts(self) -> AppResult<(ProductFilters, ProductSort, Pagination)> {
        let pagination = Pagination::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;

        let defaults = ProductSort::default();
        let field = present(self.sort_by)
            .map(|s| s.parse::<SortField>())
            .transpose()?
            .unwrap_or(defaults.field);
        let order = present(self.sort_order)
            .map(|s| s.parse::<SortOrder>())
            .transpose()?
            .unwrap_or(defaults.order);

        let filters = ProductFilters {
            category: non_empty(self.category),
            status: present(self.status)
                .map(|s| s.parse::<ProductStatus>())
                .transpose()?,
            search: non_empty(self.search),
        };

        Ok((filters, ProductSort::new(field, order), pagination))
    }
}

// ============ Handlers ============

/// List products with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<ProductPage>),
        (status = 400, description = "Invalid pagination, sort or filter parameters")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListProductsQuery>,
) -> AppResult<Json<ApiResponse<ProductPage>>> {
    let (filters, sort, pagination) = params.into_parts()?;

    let page = state.products.list(&filters, sort, pagination).await?;
    Ok(Json(ApiResponse::success(
        "Products retrieved successfully",
        page,
    )))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, description = "Missing required fields, invalid price or invalid stock quantity")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let product = state.products.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Product created successfully", product)),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.products.find_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        "Product retrieved successfully",
        product,
    )))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.products.update(&id, patch).await?;
    Ok(Json(ApiResponse::success(
        "Product updated successfully",
        product,
    )))
}

/// Delete a product, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.products.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        "Product deleted successfully",
        product,
    )))
}
