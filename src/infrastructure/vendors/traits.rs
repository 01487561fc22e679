//! # Vendor Client Trait
//!
//! Port definition for upstream vendor integrations.
//!
//! [`VendorClient`] gives the aggregation engine a uniform interface over
//! every product source. The HTTP implementation lives in
//! [`remote`](crate::infrastructure::vendors::remote); tests substitute
//! in-memory mocks.

use crate::domain::entities::product::Product;
use crate::domain::value_objects::enums::Vendor;
use crate::domain::value_objects::PriceBounds;
use crate::infrastructure::vendors::error::VendorResult;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Parameters forwarded to a vendor with a fetch.
///
/// `top` advises the vendor of a desired result count but is not
/// authoritative: the vendor may return more or fewer items. The price
/// bounds are pass-through filters.
///
/// Serializes directly into the upstream query-string shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VendorQuery {
    /// Desired result count hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    /// Lower price bound.
    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Upper price bound.
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl VendorQuery {
    /// Creates an empty query: no count hint, no price filter.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a query from a count hint and price bounds.
    #[must_use]
    pub fn with_bounds(top: u32, bounds: PriceBounds) -> Self {
        Self {
            top: Some(top),
            min_price: Some(bounds.min()),
            max_price: bounds.max(),
        }
    }
}

/// Trait defining the interface for vendor clients.
///
/// One implementation exists per transport, not per vendor: the same HTTP
/// client shape serves every vendor code, parameterized by [`Vendor`].
///
/// # Error Handling
///
/// Methods return [`VendorResult`]. Implementations map transport-specific
/// failures to [`VendorError`](crate::infrastructure::vendors::error::VendorError)
/// variants and never panic; the collapse of errors into empty results is
/// the aggregator's decision, not the client's.
#[async_trait]
pub trait VendorClient: Send + Sync + fmt::Debug {
    /// Returns the vendor this client fetches from.
    fn vendor(&self) -> Vendor;

    /// Fetches the vendor's product list for a category.
    ///
    /// # Arguments
    ///
    /// * `category` - The requested category, non-empty
    /// * `query` - Count hint and price bounds
    ///
    /// # Errors
    ///
    /// - `VendorError::Timeout` - request timed out
    /// - `VendorError::Connection` - network failure
    /// - `VendorError::Authentication` - bearer credential rejected
    /// - `VendorError::Status` - other non-success response
    /// - `VendorError::Malformed` - undecodable response body
    async fn fetch_products(
        &self,
        category: &str,
        query: &VendorQuery,
    ) -> VendorResult<Vec<Product>>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_query_serializes_empty() {
        let query = VendorQuery::unbounded();
        let encoded = serde_urlencoded_shape(&query);
        assert_eq!(encoded, "{}");
    }

    #[test]
    fn with_bounds_carries_all_params() {
        let bounds = PriceBounds::new(10.0, Some(500.0)).unwrap();
        let query = VendorQuery::with_bounds(25, bounds);
        assert_eq!(query.top, Some(25));
        assert_eq!(query.min_price, Some(10.0));
        assert_eq!(query.max_price, Some(500.0));
    }

    #[test]
    fn open_upper_bound_is_omitted() {
        let bounds = PriceBounds::new(0.0, None).unwrap();
        let query = VendorQuery::with_bounds(10, bounds);
        let encoded = serde_urlencoded_shape(&query);
        assert!(encoded.contains("\"top\":10"));
        assert!(encoded.contains("\"minPrice\":0.0"));
        assert!(!encoded.contains("maxPrice"));
    }

    // JSON stands in for the query-string encoder; both honor the same
    // serde attributes.
    fn serde_urlencoded_shape(query: &VendorQuery) -> String {
        serde_json::to_string(query).unwrap()
    }
}
