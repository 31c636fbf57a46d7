use rust_decimal::Decimal;

use product_inventory::models::{Product, ProductDraft, ProductStatus};
use product_inventory::state::AppState;

/// Factory for creating test data directly through the store
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// A complete, valid draft
    pub fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: Some(name.to_string()),
            price: Some(Decimal::new(1999, 2).into()),
            stock_quantity: Some(25),
            category: Some("Electronics".to_string()),
            status: Some(ProductStatus::Active),
            vendor: Some("TechCorp".to_string()),
            description: Some("Test product description".to_string()),
            image_url: None,
        }
    }

    /// Create a test product
    pub async fn create_product(&self, name: &str) -> Product {
        self.state
            .products
            .create(Self::draft(name))
            .await
            .unwrap()
    }

    /// Create a test product with specific listing-relevant fields
    pub async fn create_product_with(
        &self,
        name: &str,
        price: i64,
        category: &str,
        status: ProductStatus,
        vendor: &str,
    ) -> Product {
        let draft = ProductDraft {
            price: Some(Decimal::new(price, 0).into()),
            category: Some(category.to_string()),
            status: Some(status),
            vendor: Some(vendor.to_string()),
            ..Self::draft(name)
        };

        self.state.products.create(draft).await.unwrap()
    }

    /// Number of products currently stored
    pub async fn count(&self) -> usize {
        self.state.products.snapshot().await.unwrap().len()
    }
}
