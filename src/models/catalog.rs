use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ProductStatus;

/// Product count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategorySummary {
    /// Slug of the category name, e.g. `home-&-garden`
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Product count for one status, with the badge color the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusSummary {
    pub id: ProductStatus,
    pub name: String,
    pub count: usize,
    pub color: String,
}
