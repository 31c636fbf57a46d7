use std::sync::Arc;

use axum_test::TestServer;
use product_inventory::build_router;
use product_inventory::config::Config;
use product_inventory::repositories::InMemoryProductRepository;
use product_inventory::state::AppState;

/// Test configuration: no demo data, any CORS origin
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_products: 0,
        ..Config::default()
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test application with an empty store
    pub async fn new() -> Self {
        let repository = Arc::new(InMemoryProductRepository::new());
        Self::with_state(AppState::with_repository(test_config(), repository))
    }

    /// Create a test application seeded with `count` demo products
    pub async fn seeded(count: usize) -> Self {
        let config = Config {
            seed_products: count,
            ..test_config()
        };

        let state = AppState::new(config)
            .await
            .expect("Failed to create test app state");
        Self::with_state(state)
    }

    fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
