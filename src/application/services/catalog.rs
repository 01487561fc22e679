//! # Catalog Service
//!
//! The two public operations of the system, composed from the pipeline
//! stages: aggregate, rank, paginate, assign identifiers.
//!
//! Listing degrades gracefully: vendor outages shrink the result, they
//! never fail it. Only malformed caller input is rejected, and that happens
//! before this service is reached.

use crate::application::services::aggregation::ProductAggregator;
use crate::application::services::identity::{self, ListedProduct};
use crate::application::services::ranking;
use crate::domain::entities::product::Product;
use crate::domain::value_objects::custom_id::CustomId;
use crate::domain::value_objects::enums::SortSpec;
use crate::domain::value_objects::page::PageRequest;
use crate::domain::value_objects::PriceBounds;
use crate::infrastructure::vendors::traits::VendorQuery;

/// A validated listing request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListQuery {
    /// Requested page.
    pub page: PageRequest,
    /// Sort field and direction.
    pub sort: SortSpec,
    /// Price range forwarded to vendors.
    pub bounds: PriceBounds,
}

impl ListQuery {
    /// Creates a listing request.
    #[must_use]
    pub fn new(page: PageRequest, sort: SortSpec, bounds: PriceBounds) -> Self {
        Self { page, sort, bounds }
    }
}

/// Service exposing the category listing and point lookup operations.
#[derive(Debug)]
pub struct CatalogService {
    aggregator: ProductAggregator,
}

impl CatalogService {
    /// Creates a catalog service over the given aggregator.
    #[must_use]
    pub fn new(aggregator: ProductAggregator) -> Self {
        Self { aggregator }
    }

    /// Returns one ranked, paginated, identified page of the category's
    /// aggregation.
    ///
    /// Never fails: unreachable vendors reduce the page, possibly to empty.
    pub async fn list(&self, category: &str, query: &ListQuery) -> Vec<ListedProduct> {
        let vendor_query = VendorQuery::with_bounds(query.page.size(), query.bounds);
        let outcome = self.aggregator.fetch_all(category, &vendor_query).await;

        tracing::info!(
            category,
            queried = outcome.report.vendors_queried,
            responded = outcome.report.vendors_responded,
            items = outcome.report.items_collected,
            sort = %query.sort,
            "aggregated category listing"
        );

        let ranked = ranking::rank(outcome.products, query.sort);
        let page = ranking::page_slice(&ranked, query.page).to_vec();
        identity::assign_ids(category, page, query.page.offset())
    }

    /// Looks up a single product by its synthetic identifier.
    ///
    /// Re-fetches the entire unpaginated aggregation for the category and
    /// re-ranks it under `sort` before resolving the identifier's position.
    /// Callers that pass the sort parameters of the originating list call
    /// get back the item that call labeled; the result is still only as
    /// stable as the upstream data between the two calls.
    ///
    /// Returns `None` when the identifier does not resolve; that is a
    /// normal outcome, not an error.
    pub async fn find_by_id(
        &self,
        category: &str,
        product_id: &str,
        sort: SortSpec,
    ) -> Option<Product> {
        let id = CustomId::parse(category, product_id)?;

        let outcome = self
            .aggregator
            .fetch_all(category, &VendorQuery::unbounded())
            .await;
        let ranked = ranking::rank(outcome.products, sort);

        ranked.into_iter().nth(id.position())
    }
}
