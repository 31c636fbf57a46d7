use std::sync::Arc;

use time::OffsetDateTime;

use crate::config::Config;
use crate::error::AppResult;
use crate::repositories::{InMemoryProductRepository, ProductRepository};
use crate::services::seed_products;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Product collection store
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Create a new AppState with an in-memory store seeded with
    /// `config.seed_products` demo products
    pub async fn new(config: Config) -> AppResult<Self> {
        let repository = InMemoryProductRepository::new();

        if config.seed_products > 0 {
            repository
                .seed(seed_products(config.seed_products, OffsetDateTime::now_utc()))
                .await?;
        }

        Ok(Self::with_repository(config, Arc::new(repository)))
    }

    /// Create AppState with a custom repository (for testing)
    pub fn with_repository(config: Config, products: Arc<dyn ProductRepository>) -> Self {
        Self { config, products }
    }
}
