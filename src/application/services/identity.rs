//! # Identity Assignment
//!
//! Assigns each item of a returned page its synthetic identifier.
//!
//! Pure, no failure modes: item `i` of a page starting at `offset` gets
//! `"<category>-<offset + i>"`. See
//! [`CustomId`](crate::domain::value_objects::custom_id::CustomId) for the
//! stability caveats of these identifiers.

use crate::domain::entities::product::Product;
use crate::domain::value_objects::custom_id::CustomId;
use serde::Serialize;

/// A product paired with its synthetic identifier, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct {
    /// The underlying product, flattened into the response object.
    #[serde(flatten)]
    pub product: Product,
    /// Position-derived identifier usable for a later point lookup.
    #[serde(rename = "customId")]
    pub custom_id: CustomId,
}

/// Assigns identifiers to the items of one page.
///
/// `offset` is the zero-based rank of the page's first item within the
/// full ranked aggregation.
#[must_use]
pub fn assign_ids(category: &str, items: Vec<Product>, offset: usize) -> Vec<ListedProduct> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, product)| ListedProduct {
            custom_id: CustomId::new(category, offset + i),
            product,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::Vendor;

    fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                name: format!("item-{i}"),
                company: Vendor::Myn,
                category: "Tablet".to_string(),
                price: 100.0,
                rating: 4.0,
                discount: 0.0,
            })
            .collect()
    }

    #[test]
    fn ids_start_at_offset() {
        let listed = assign_ids("Tablet", products(3), 5);
        let ids: Vec<String> = listed.iter().map(|p| p.custom_id.to_string()).collect();
        assert_eq!(ids, ["Tablet-5", "Tablet-6", "Tablet-7"]);
    }

    #[test]
    fn first_page_starts_at_zero() {
        let listed = assign_ids("Tablet", products(2), 0);
        assert_eq!(listed[0].custom_id.to_string(), "Tablet-0");
    }

    #[test]
    fn assignment_is_deterministic() {
        let items = products(4);
        let first = assign_ids("Tablet", items.clone(), 8);
        let second = assign_ids("Tablet", items, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_page_assigns_nothing() {
        assert!(assign_ids("Tablet", Vec::new(), 10).is_empty());
    }

    #[test]
    fn serializes_flattened_with_custom_id() {
        let listed = assign_ids("Tablet", products(1), 5);
        let json = serde_json::to_value(&listed[0]).unwrap();
        assert_eq!(json["name"], "item-0");
        assert_eq!(json["company"], "MYN");
        assert_eq!(json["customId"], "Tablet-5");
    }
}
