pub mod catalog;
pub mod health;
pub mod product;

pub use catalog::{list_categories, list_statuses};
pub use health::{health, not_found, HealthStatus};
pub use product::{
    create_product, delete_product, get_product, list_products, update_product,
    ListProductsQuery,
};
