//! Filter, sort and paginate a product listing.
//!
//! The pipeline runs in a fixed order: category, status, search, a stable
//! sort of the whole filtered set, then the page slice. It never fails.

use std::cmp::Ordering;

use crate::models::{
    Pagination, Product, ProductFilters, ProductPage, ProductSort, SortField, SortOrder,
};

/// Run the listing pipeline against `products` (newest first by convention)
pub fn query(
    products: &[Product],
    filters: &ProductFilters,
    sort: ProductSort,
    pagination: Pagination,
) -> ProductPage {
    let mut matched: Vec<&Product> = products.iter().collect();

    if let Some(category) = filters.category.as_deref() {
        matched.retain(|p| p.category == category);
    }

    if let Some(status) = filters.status {
        matched.retain(|p| p.status == status);
    }

    if let Some(search) = filters.search.as_deref() {
        let needle = search.to_lowercase();
        matched.retain(|p| matches_search(p, &needle));
    }

    // sort_by is stable: equal keys keep their prior relative order
    matched.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = matched.len();
    let limit = pagination.limit();
    let total_pages = total.div_ceil(limit);

    let products = matched
        .into_iter()
        .skip(pagination.offset())
        .take(limit)
        .cloned()
        .collect();

    ProductPage {
        products,
        total,
        page: pagination.page(),
        limit,
        total_pages,
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    [&product.name, &product.vendor, &product.category]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Price => a.price.cmp(&b.price),
        SortField::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}
