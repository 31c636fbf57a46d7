use crate::models::{CategorySummary, Product, StatusSummary};

/// Slug used as a category id: lowercase, whitespace runs collapsed to `-`
pub fn category_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Count products per category, in order of first appearance
pub fn category_summaries(products: &[Product]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for product in products {
        match summaries.iter_mut().find(|s| s.name == product.category) {
            Some(summary) => summary.count += 1,
            None => summaries.push(CategorySummary {
                id: category_slug(&product.category),
                name: product.category.clone(),
                count: 1,
            }),
        }
    }

    summaries
}

/// Count products per status, in order of first appearance
pub fn status_summaries(products: &[Product]) -> Vec<StatusSummary> {
    let mut summaries: Vec<StatusSummary> = Vec::new();

    for product in products {
        match summaries.iter_mut().find(|s| s.id == product.status) {
            Some(summary) => summary.count += 1,
            None => summaries.push(StatusSummary {
                id: product.status,
                name: product.status.label().to_string(),
                count: 1,
                color: product.status.color().to_string(),
            }),
        }
    }

    summaries
}
