//! # Product Aggregation Engine
//!
//! Concurrent multi-vendor product collection.
//!
//! This module provides the [`ProductAggregator`], which fans one fetch out
//! to every configured vendor concurrently, waits for all of them to settle
//! (join-all, never race/first-wins), and concatenates the successful
//! results in fixed vendor order.
//!
//! Failure policy: a vendor that errors, times out, or panics contributes
//! zero items and is logged; it never aborts the other vendors and never
//! surfaces as an error. If the fan-out as a whole cannot be awaited within
//! the overall timeout, the aggregation degrades to an empty collection.

use crate::domain::entities::product::Product;
use crate::infrastructure::vendors::traits::{VendorClient, VendorQuery};
use futures::future::join_all;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

fn default_per_vendor_timeout_ms() -> u64 {
    5_000
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Configuration for product aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    /// Per-vendor timeout in milliseconds. One slow vendor forfeits its
    /// slot in the result rather than stalling the aggregation.
    #[serde(default = "default_per_vendor_timeout_ms")]
    pub per_vendor_timeout_ms: u64,
    /// Overall timeout for the whole fan-out in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_vendor_timeout_ms: default_per_vendor_timeout_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AggregationConfig {
    /// Creates a configuration with the specified overall timeout.
    #[must_use]
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the per-vendor timeout.
    #[must_use]
    pub fn with_per_vendor_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_vendor_timeout_ms = timeout_ms;
        self
    }
}

/// Bookkeeping counters for one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationReport {
    /// Number of vendors the fan-out targeted.
    pub vendors_queried: usize,
    /// Number of vendors that returned a usable result.
    pub vendors_responded: usize,
    /// Total items collected across responding vendors.
    pub items_collected: usize,
}

/// Result of one aggregation run: the merged, unordered collection plus
/// its report.
#[derive(Debug)]
pub struct AggregationOutcome {
    /// Products concatenated in fixed vendor order; order within one
    /// vendor's contribution is whatever that vendor returned.
    pub products: Vec<Product>,
    /// Counters for observability.
    pub report: AggregationReport,
}

impl AggregationOutcome {
    fn empty(vendors_queried: usize) -> Self {
        Self {
            products: Vec::new(),
            report: AggregationReport {
                vendors_queried,
                vendors_responded: 0,
                items_collected: 0,
            },
        }
    }
}

/// Engine for collecting products from multiple vendors concurrently.
#[derive(Debug)]
pub struct ProductAggregator {
    clients: Vec<Arc<dyn VendorClient>>,
    config: AggregationConfig,
}

impl ProductAggregator {
    /// Creates a new aggregator over the given vendor clients.
    ///
    /// The client order is the concatenation order of the merged result.
    #[must_use]
    pub fn new(clients: Vec<Arc<dyn VendorClient>>, config: AggregationConfig) -> Self {
        Self { clients, config }
    }

    /// Creates an aggregator with default configuration.
    #[must_use]
    pub fn with_defaults(clients: Vec<Arc<dyn VendorClient>>) -> Self {
        Self::new(clients, AggregationConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Fetches the category from every vendor concurrently and merges the
    /// results.
    ///
    /// Waits for all vendor calls to settle before returning. Vendors that
    /// fail in any way contribute nothing; this method itself never fails.
    pub async fn fetch_all(&self, category: &str, query: &VendorQuery) -> AggregationOutcome {
        let vendors_queried = self.clients.len();
        let per_vendor = Duration::from_millis(self.config.per_vendor_timeout_ms);
        let overall = Duration::from_millis(self.config.timeout_ms);

        let mut handles = Vec::with_capacity(vendors_queried);
        for client in &self.clients {
            let client = Arc::clone(client);
            let category = category.to_owned();
            let query = query.clone();

            handles.push(tokio::spawn(async move {
                let vendor = client.vendor();
                match timeout(per_vendor, client.fetch_products(&category, &query)).await {
                    Ok(Ok(items)) => (vendor, Ok(items)),
                    Ok(Err(e)) => (vendor, Err(e.to_string())),
                    Err(_) => (
                        vendor,
                        Err(format!("no response within {}ms", per_vendor.as_millis())),
                    ),
                }
            }));
        }

        // Join in spawn order so the concatenation order is the vendor order.
        let settled = match timeout(overall, join_all(handles)).await {
            Ok(settled) => settled,
            Err(_) => {
                tracing::error!(
                    category,
                    timeout_ms = self.config.timeout_ms,
                    "aggregation fan-out timed out, degrading to empty collection"
                );
                return AggregationOutcome::empty(vendors_queried);
            }
        };

        let mut products = Vec::new();
        let mut vendors_responded = 0;

        for joined in settled {
            match joined {
                Ok((vendor, Ok(items))) => {
                    vendors_responded += 1;
                    tracing::debug!(%vendor, count = items.len(), "vendor responded");
                    products.extend(items);
                }
                Ok((vendor, Err(reason))) => {
                    tracing::warn!(%vendor, %reason, "vendor fetch failed, contributing no items");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "vendor task aborted, contributing no items");
                }
            }
        }

        let report = AggregationReport {
            vendors_queried,
            vendors_responded,
            items_collected: products.len(),
        };

        AggregationOutcome { products, report }
    }
}
