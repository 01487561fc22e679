//! # Ranking and Pagination
//!
//! Deterministic ordering and slicing of an aggregated collection.
//!
//! The sort is stable: items with equal keys keep their relative order from
//! the vendor concatenation. That invariant is what makes the synthetic
//! identifiers of [`identity`](crate::application::services::identity)
//! reproducible across calls when upstream data is unchanged.
//!
//! Unknown sort fields never reach this module; they are rejected as
//! validation errors at the API boundary.

use crate::domain::entities::product::Product;
use crate::domain::value_objects::enums::SortSpec;
use crate::domain::value_objects::page::PageRequest;

/// Sorts the collection by the given field and direction.
///
/// Stable total order via `f64::total_cmp`; descending reverses only the
/// comparison, so equal keys still preserve pre-sort order.
#[must_use]
pub fn rank(mut items: Vec<Product>, sort: SortSpec) -> Vec<Product> {
    items.sort_by(|a, b| {
        let ordering = a.sort_key(sort.field).total_cmp(&b.sort_key(sort.field));
        if sort.order.is_ascending() {
            ordering
        } else {
            ordering.reverse()
        }
    });
    items
}

/// Returns the requested page of a ranked collection.
///
/// The slice is `[offset, offset + n)` clipped to the available length;
/// pages beyond the data yield an empty slice, not an error.
#[must_use]
pub fn page_slice(items: &[Product], page: PageRequest) -> &[Product] {
    let offset = page.offset();
    let end = offset
        .saturating_add(page.size() as usize)
        .min(items.len());
    items.get(offset..end).unwrap_or(&[])
}
