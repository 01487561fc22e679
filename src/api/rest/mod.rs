//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /api/v1/categories/{category}/products` - ranked, paginated
//!   listing with query params `n`, `page`, `sortBy`, `sortOrder`,
//!   `minPrice`, `maxPrice`
//! - `GET /api/v1/categories/{category}/products/{product_id}` - point
//!   lookup by synthetic identifier (optional `sortBy`/`sortOrder`)
//! - `GET /api/v1/health` - health check
//!
//! # Usage
//!
//! ```ignore
//! use top_products::api::rest::{AppState, create_router};
//!
//! let router = create_router(AppState { catalog });
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse, ListParams, LookupParams};
pub use routes::create_router;
