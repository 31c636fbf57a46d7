use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductStatus};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Optional predicates applied to a product listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Exact category match
    pub category: Option<String>,
    /// Exact status match
    pub status: Option<ProductStatus>,
    /// Case-insensitive substring over name, vendor and category
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Price,
    StockQuantity,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::StockQuantity => "stockQuantity",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "stockQuantity" => Ok(Self::StockQuantity),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(AppError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::Validation(format!("Invalid sort order: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl ProductSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Newest first
impl Default for ProductSort {
    fn default() -> Self {
        Self::new(SortField::CreatedAt, SortOrder::Desc)
    }
}

/// 1-indexed page request. Construct through [`Pagination::new`] so the
/// bounds are always checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> AppResult<Self> {
        if page < 1 || !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::Validation(
                "Invalid pagination parameters".to_string(),
            ));
        }

        let page = usize::try_from(page)
            .map_err(|_| AppError::Validation("Invalid pagination parameters".to_string()))?;

        Ok(Self {
            page,
            limit: limit as usize,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            limit: DEFAULT_PAGE_SIZE as usize,
        }
    }
}

/// One page of a filtered, sorted listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Number of products matching the filters, across all pages
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
