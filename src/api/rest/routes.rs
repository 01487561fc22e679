//! # Route Table
//!
//! Builds the axum router over the REST handlers.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the application router.
///
/// CORS is permissive: the service is a read-only aggregation facade.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route(
            "/api/v1/categories/{category}/products",
            get(handlers::list_products),
        )
        .route(
            "/api/v1/categories/{category}/products/{product_id}",
            get(handlers::get_product),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
