pub mod memory;

pub use memory::InMemoryProductRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Pagination, Product, ProductDraft, ProductFilters, ProductPage, ProductPatch, ProductSort,
};

/// Owner of the product collection and its CRUD contract
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Filtered, sorted page of the current collection
    async fn list(
        &self,
        filters: &ProductFilters,
        sort: ProductSort,
        pagination: Pagination,
    ) -> AppResult<ProductPage>;

    /// Validate a draft and insert it at the front of the collection
    async fn create(&self, draft: ProductDraft) -> AppResult<Product>;

    async fn find_by_id(&self, id: &str) -> AppResult<Product>;

    /// Merge a patch into an existing product, keeping its id, creation time
    /// and position
    async fn update(&self, id: &str, patch: ProductPatch) -> AppResult<Product>;

    /// Remove a product and return it
    async fn delete(&self, id: &str) -> AppResult<Product>;

    /// Full copy of the collection in its stored order
    async fn snapshot(&self) -> AppResult<Vec<Product>>;

    /// Append already-built products
    async fn seed(&self, products: Vec<Product>) -> AppResult<()>;
}
