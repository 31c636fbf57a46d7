mod common;

use axum::http::StatusCode;
use product_inventory::models::ProductStatus;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_list_categories() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory
        .create_product_with("Novel", 12, "Books", ProductStatus::Active, "BookWorld")
        .await;
    factory
        .create_product_with("Lawn Chair", 40, "Home & Garden", ProductStatus::Active, "HomeStyle")
        .await;
    factory
        .create_product_with("Atlas", 30, "Books", ProductStatus::Inactive, "BookWorld")
        .await;

    let response = app.server.get("/api/categories").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        serde_json::json!([
            { "id": "books", "name": "Books", "count": 2 },
            { "id": "home-&-garden", "name": "Home & Garden", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_list_statuses() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory
        .create_product_with("Novel", 12, "Books", ProductStatus::Active, "BookWorld")
        .await;
    factory
        .create_product_with("Atlas", 30, "Books", ProductStatus::Discontinued, "BookWorld")
        .await;

    let response = app.server.get("/api/statuses").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["data"],
        serde_json::json!([
            { "id": "discontinued", "name": "Discontinued", "count": 1, "color": "red" },
            { "id": "active", "name": "Active", "count": 1, "color": "green" }
        ])
    );
}

#[tokio::test]
async fn test_summaries_follow_deletes() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let product = factory.create_product("Keyboard").await;

    app.server
        .delete(&format!("/api/products/{}", product.id))
        .await
        .assert_status(StatusCode::OK);

    let body: serde_json::Value = app.server.get("/api/categories").await.json();
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_seeded_categories_add_up() {
    let app = TestApp::seeded(40).await;

    let body: serde_json::Value = app.server.get("/api/categories").await.json();
    let total: u64 = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();

    assert_eq!(total, 40);
}
