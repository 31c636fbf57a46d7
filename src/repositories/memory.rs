use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Pagination, Product, ProductDraft, ProductFilters, ProductPage, ProductPatch, ProductSort,
};
use crate::repositories::ProductRepository;
use crate::services::query;

/// Product collection held in process memory.
///
/// Newest products sit at the front. Every read-modify-write runs under a
/// single write guard.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

fn new_product_id() -> String {
    format!("prod-{}", Uuid::now_v7().simple())
}

fn not_found() -> AppError {
    AppError::NotFound("Product".to_string())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(
        &self,
        filters: &ProductFilters,
        sort: ProductSort,
        pagination: Pagination,
    ) -> AppResult<ProductPage> {
        let products = self.products.read().await;
        Ok(query(&products, filters, sort, pagination))
    }

    async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let fields = draft.validate()?;
        let now = OffsetDateTime::now_utc();
        let product = fields.into_product(new_product_id(), now, now);

        self.products.write().await.insert(0, product.clone());

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> AppResult<Product> {
        let mut products = self.products.write().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(not_found)?;
        let existing = &products[index];

        let fields = patch.merge_onto(existing).validate()?;
        let updated_at = OffsetDateTime::now_utc().max(existing.created_at);
        let product = fields.into_product(existing.id.clone(), existing.created_at, updated_at);

        products[index] = product.clone();

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete(&self, id: &str) -> AppResult<Product> {
        let mut products = self.products.write().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(not_found)?;
        let removed = products.remove(index);

        tracing::info!(product_id = %removed.id, "Product deleted");
        Ok(removed)
    }

    async fn snapshot(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn seed(&self, products: Vec<Product>) -> AppResult<()> {
        let count = products.len();
        self.products.write().await.extend(products);

        tracing::info!(count, "Seeded products");
        Ok(())
    }
}
