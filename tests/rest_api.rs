//! End-to-end tests of the REST surface over stub vendor clients.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use top_products::api::rest::{AppState, create_router};
use top_products::application::services::aggregation::{AggregationConfig, ProductAggregator};
use top_products::application::services::catalog::CatalogService;
use top_products::domain::entities::product::Product;
use top_products::domain::value_objects::enums::Vendor;
use top_products::infrastructure::vendors::error::{VendorError, VendorResult};
use top_products::infrastructure::vendors::traits::{VendorClient, VendorQuery};
use tower::ServiceExt;

#[derive(Debug)]
struct StubVendorClient {
    vendor: Vendor,
    prices: Vec<f64>,
    fail: bool,
}

impl StubVendorClient {
    fn returning(vendor: Vendor, prices: &[f64]) -> Arc<dyn VendorClient> {
        Arc::new(Self {
            vendor,
            prices: prices.to_vec(),
            fail: false,
        })
    }

    fn failing(vendor: Vendor) -> Arc<dyn VendorClient> {
        Arc::new(Self {
            vendor,
            prices: Vec::new(),
            fail: true,
        })
    }
}

#[async_trait]
impl VendorClient for StubVendorClient {
    fn vendor(&self) -> Vendor {
        self.vendor
    }

    async fn fetch_products(
        &self,
        category: &str,
        _query: &VendorQuery,
    ) -> VendorResult<Vec<Product>> {
        if self.fail {
            return Err(VendorError::connection("vendor down"));
        }
        Ok(self
            .prices
            .iter()
            .enumerate()
            .map(|(i, price)| Product {
                name: format!("{}-{i}", self.vendor),
                company: self.vendor,
                category: category.to_string(),
                price: *price,
                rating: 4.0,
                discount: 0.0,
            })
            .collect())
    }
}

fn router(clients: Vec<Arc<dyn VendorClient>>) -> axum::Router {
    let aggregator = ProductAggregator::new(clients, AggregationConfig::default());
    create_router(AppState {
        catalog: Arc::new(CatalogService::new(aggregator)),
    })
}

fn default_clients() -> Vec<Arc<dyn VendorClient>> {
    vec![
        StubVendorClient::returning(Vendor::Amz, &[30.0, 10.0]),
        StubVendorClient::returning(Vendor::Flp, &[20.0]),
        StubVendorClient::failing(Vendor::Snp),
    ]
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn lists_sorted_page_with_custom_ids() {
    let uri = "/api/v1/categories/Phone/products?n=2&page=1&sortBy=price&sortOrder=asc";
    let (status, body) = get(router(default_clients()), uri).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["price"], 10.0);
    assert_eq!(items[0]["customId"], "Phone-0");
    assert_eq!(items[1]["price"], 20.0);
    assert_eq!(items[1]["customId"], "Phone-1");
}

#[tokio::test]
async fn failing_vendor_degrades_instead_of_erroring() {
    let uri = "/api/v1/categories/Phone/products?n=10";
    let (status, body) = get(router(default_clients()), uri).await;

    assert_eq!(status, StatusCode::OK);
    // Two healthy vendors contributed three items; the failing one none.
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn all_vendors_down_yields_empty_list() {
    let clients = vec![
        StubVendorClient::failing(Vendor::Amz),
        StubVendorClient::failing(Vendor::Flp),
    ];
    let (status, body) = get(router(clients), "/api/v1/categories/Phone/products").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn page_beyond_data_is_an_empty_list() {
    let uri = "/api/v1/categories/Phone/products?n=5&page=10";
    let (status, body) = get(router(default_clients()), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_sort_field_is_a_client_error() {
    let uri = "/api/v1/categories/Phone/products?sortBy=name";
    let (status, body) = get(router(default_clients()), uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sort field"));
}

#[tokio::test]
async fn zero_page_is_a_client_error() {
    let uri = "/api/v1/categories/Phone/products?page=0";
    let (status, _) = get(router(default_clients()), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lookup_resolves_a_listed_identifier() {
    let (status, body) = get(
        router(default_clients()),
        "/api/v1/categories/Phone/products/Phone-0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 10.0);
    assert_eq!(body["category"], "Phone");
}

#[tokio::test]
async fn lookup_of_unknown_identifier_is_not_found() {
    let (status, body) = get(
        router(default_clients()),
        "/api/v1/categories/Phone/products/Phone-99",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Phone-99"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(router(default_clients()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
