pub mod catalog;
pub mod query;
pub mod seed;

pub use catalog::{category_slug, category_summaries, status_summaries};
pub use query::query;
pub use seed::seed_products;
