//! # REST Handlers
//!
//! Request parsing, validation, and response mapping for the listing and
//! lookup endpoints.
//!
//! Parsing policy: unknown `sortBy` values, zero pages or page sizes, and
//! inverted price bounds are client errors (`400`). A `sortOrder` of
//! `asc` selects ascending and any other value selects descending, per the
//! listing contract. Vendor failures never surface here; a degraded
//! aggregation just returns a shorter (possibly empty) page.

use crate::application::error::ApplicationError;
use crate::application::services::catalog::{CatalogService, ListQuery};
use crate::application::services::identity::ListedProduct;
use crate::domain::entities::product::Product;
use crate::domain::errors::validate_category;
use crate::domain::value_objects::enums::{SortField, SortOrder, SortSpec};
use crate::domain::value_objects::page::{DEFAULT_PAGE_SIZE, PageRequest};
use crate::domain::value_objects::PriceBounds;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the REST handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog service every request goes through.
    pub catalog: Arc<CatalogService>,
}

/// JSON error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
}

/// Error wrapper mapping [`ApplicationError`] onto HTTP responses.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Query parameters of the listing endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    /// Page size.
    pub n: Option<u32>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Sort field name.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<String>,
    /// Lower price bound.
    pub min_price: Option<f64>,
    /// Upper price bound.
    pub max_price: Option<f64>,
}

/// Query parameters of the lookup endpoint.
///
/// Lookups re-rank a fresh aggregation; passing the sort parameters of the
/// originating list call makes the identifier resolve to the same position.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupParams {
    /// Sort field name.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<String>,
}

/// `GET /api/v1/categories/{category}/products`
pub async fn list_products(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ListedProduct>>, ApiError> {
    let query = build_list_query(&category, &params)?;
    Ok(Json(state.catalog.list(&category, &query).await))
}

/// `GET /api/v1/categories/{category}/products/{product_id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path((category, product_id)): Path<(String, String)>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Product>, ApiError> {
    validate_category(&category).map_err(ApplicationError::from)?;
    let sort = parse_sort(params.sort_by.as_deref(), params.sort_order.as_deref())?;

    state
        .catalog
        .find_by_id(&category, &product_id, sort)
        .await
        .map(Json)
        .ok_or_else(|| ApplicationError::not_found("product", &product_id).into())
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Validates raw listing parameters into a typed query.
fn build_list_query(category: &str, params: &ListParams) -> Result<ListQuery, ApplicationError> {
    validate_category(category)?;
    let sort = parse_sort(params.sort_by.as_deref(), params.sort_order.as_deref())?;
    let page = PageRequest::new(
        params.page.unwrap_or(1),
        params.n.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    let bounds = PriceBounds::new(params.min_price.unwrap_or(0.0), params.max_price)?;
    Ok(ListQuery::new(page, sort, bounds))
}

/// Parses the sort parameters.
///
/// An unknown field is a validation error; an unknown direction is
/// descending by contract.
fn parse_sort(field: Option<&str>, order: Option<&str>) -> Result<SortSpec, ApplicationError> {
    let field = match field {
        None => SortField::default(),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApplicationError::validation(format!("unknown sort field: {raw}")))?,
    };
    let order = order.map_or(SortOrder::Ascending, SortOrder::from_param);
    Ok(SortSpec::new(field, order))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listing_contract() {
        let query = build_list_query("Phone", &ListParams::default()).unwrap();
        assert_eq!(query.page.page(), 1);
        assert_eq!(query.page.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort, SortSpec::default());
        assert_eq!(query.bounds, PriceBounds::default());
    }

    #[test]
    fn unknown_sort_field_is_a_validation_error() {
        let params = ListParams {
            sort_by: Some("name".to_string()),
            ..ListParams::default()
        };
        let err = build_list_query("Phone", &params).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn non_asc_order_is_descending() {
        let sort = parse_sort(Some("rating"), Some("whatever")).unwrap();
        assert_eq!(sort.order, SortOrder::Descending);

        let sort = parse_sort(Some("rating"), Some("asc")).unwrap();
        assert_eq!(sort.order, SortOrder::Ascending);
    }

    #[test]
    fn zero_page_is_rejected() {
        let params = ListParams {
            page: Some(0),
            ..ListParams::default()
        };
        assert!(build_list_query("Phone", &params).is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let params = ListParams {
            min_price: Some(100.0),
            max_price: Some(10.0),
            ..ListParams::default()
        };
        let err = build_list_query("Phone", &params).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_category_is_rejected() {
        assert!(build_list_query("  ", &ListParams::default()).is_err());
    }
}
