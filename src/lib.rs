// Library crate for the product inventory service
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::handlers::{
    create_product, delete_product, get_product, health, list_categories, list_products,
    list_statuses, not_found, update_product,
};
use crate::middlewares::{build_cors_layer, handle_panic};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Product routes
        .route("/api/products", get(list_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        // Dashboard filter options
        .route("/api/categories", get(list_categories))
        .route("/api/statuses", get(list_statuses));

    let router = Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .fallback(not_found);

    with_middleware(router, &state.config).with_state(state)
}

/// Wrap a router in the HTTP middleware stack.
///
/// Layers are applied innermost first: panic recovery, request tracing, then
/// CORS on the outside.
pub fn with_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
}
