//! # Product Entity
//!
//! A vendor-supplied product listing.
//!
//! Products are read-only once fetched: every field comes from one upstream
//! vendor response, normalized into this shape. Vendors guarantee no natural
//! key, so uniqueness within a page is synthesized at response time via
//! [`CustomId`](crate::domain::value_objects::custom_id::CustomId).

use crate::domain::value_objects::enums::{SortField, Vendor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single product listing from one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Vendor-provided display name.
    pub name: String,
    /// The vendor that supplied this listing.
    pub company: Vendor,
    /// The requested category, echoed from the query.
    pub category: String,
    /// Listed price, non-negative.
    pub price: f64,
    /// Vendor rating.
    pub rating: f64,
    /// Discount percentage.
    pub discount: f64,
}

impl Product {
    /// Returns the value of the given numeric sort field.
    #[inline]
    #[must_use]
    pub fn sort_key(&self, field: SortField) -> f64 {
        match field {
            SortField::Price => self.price,
            SortField::Rating => self.rating,
            SortField::Discount => self.discount,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {} @ {})",
            self.name, self.company, self.category, self.price
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            name: "Noise-Cancelling Headphones".to_string(),
            company: Vendor::Amz,
            category: "Audio".to_string(),
            price: 129.99,
            rating: 4.4,
            discount: 15.0,
        }
    }

    #[test]
    fn sort_key_selects_field() {
        let product = sample();
        assert_eq!(product.sort_key(SortField::Price), 129.99);
        assert_eq!(product.sort_key(SortField::Rating), 4.4);
        assert_eq!(product.sort_key(SortField::Discount), 15.0);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Noise-Cancelling Headphones");
        assert_eq!(json["company"], "AMZ");
        assert_eq!(json["category"], "Audio");
        assert_eq!(json["price"], 129.99);
    }

    #[test]
    fn display_names_vendor_and_category() {
        let text = sample().to_string();
        assert!(text.contains("AMZ"));
        assert!(text.contains("Audio"));
    }
}
