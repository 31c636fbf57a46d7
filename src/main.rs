use anyhow::Context;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use product_inventory::build_router;
use product_inventory::config::{Config, LogFormat};
use product_inventory::handlers::{self, HealthStatus};
use product_inventory::models::{
    CategorySummary, Product, ProductDraft, ProductPage, ProductPatch, ProductStatus,
    StatusSummary,
};
use product_inventory::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::product::list_products,
        handlers::product::create_product,
        handlers::product::get_product,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::catalog::list_categories,
        handlers::catalog::list_statuses,
    ),
    components(schemas(
        Product,
        ProductStatus,
        ProductDraft,
        ProductPatch,
        ProductPage,
        CategorySummary,
        StatusSummary,
        HealthStatus,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Product inventory management endpoints"),
        (name = "Catalog", description = "Category and status summaries for dashboard filters")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    let addr = config.server_addr();

    // Initialize application state (in-memory store with demo data)
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
