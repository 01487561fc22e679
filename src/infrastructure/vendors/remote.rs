//! # Remote Vendor Client
//!
//! HTTP implementation of [`VendorClient`] against the upstream vendor API.
//!
//! One instance exists per vendor code; all instances share the same base
//! URL and bearer credential. The upstream surface is a single endpoint:
//!
//! ```text
//! GET {base_url}/companies/{vendor}/categories/{category}/products
//!     ?top=&minPrice=&maxPrice=
//! ```
//!
//! The response is an array of product objects. `company` and `category`
//! on the normalized [`Product`] are stamped from the request, echoing the
//! query rather than trusting the payload.

use crate::domain::entities::product::Product;
use crate::domain::value_objects::enums::Vendor;
use crate::infrastructure::vendors::error::VendorResult;
use crate::infrastructure::vendors::http_client::HttpClient;
use crate::infrastructure::vendors::traits::{VendorClient, VendorQuery};
use async_trait::async_trait;
use serde::Deserialize;

/// A product object as the upstream vendor API returns it.
///
/// Fields beyond these are ignored; a body missing any of them is a
/// malformed payload.
#[derive(Debug, Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
    rating: f64,
    discount: f64,
}

impl RawProduct {
    fn normalize(self, vendor: Vendor, category: &str) -> Product {
        Product {
            name: self.name,
            company: vendor,
            category: category.to_string(),
            price: self.price,
            rating: self.rating,
            discount: self.discount,
        }
    }
}

/// HTTP vendor client for one vendor code.
#[derive(Debug, Clone)]
pub struct HttpVendorClient {
    vendor: Vendor,
    base_url: String,
    http: HttpClient,
}

impl HttpVendorClient {
    /// Creates a client for `vendor` against `base_url`, authenticating
    /// with the given bearer credential.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Internal` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        vendor: Vendor,
        base_url: impl Into<String>,
        token: &str,
        timeout_ms: u64,
    ) -> VendorResult<Self> {
        let base_url = base_url.into();
        Ok(Self {
            vendor,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: HttpClient::with_bearer(timeout_ms, token)?,
        })
    }

    fn products_url(&self, category: &str) -> String {
        format!(
            "{}/companies/{}/categories/{}/products",
            self.base_url,
            self.vendor.code(),
            category
        )
    }
}

#[async_trait]
impl VendorClient for HttpVendorClient {
    fn vendor(&self) -> Vendor {
        self.vendor
    }

    async fn fetch_products(
        &self,
        category: &str,
        query: &VendorQuery,
    ) -> VendorResult<Vec<Product>> {
        let url = self.products_url(category);
        let raw: Vec<RawProduct> = self.http.get_with_params(&url, query).await?;

        tracing::debug!(
            vendor = %self.vendor,
            category,
            count = raw.len(),
            "fetched vendor products"
        );

        Ok(raw
            .into_iter()
            .map(|r| r.normalize(self.vendor, category))
            .collect())
    }
}
