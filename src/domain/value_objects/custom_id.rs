//! # Custom Identifier
//!
//! Synthetic per-item identifier derived from category and ranked position.
//!
//! A [`CustomId`] is a function of `(category, position)`, not of product
//! identity: the item at zero-based position `p` of a category's ranked
//! aggregation is always `"<category>-<p>"`, independent of which vendor
//! supplied it. The identifier is only stable for as long as upstream data
//! and the applied sort do not change between calls.
//!
//! # Examples
//!
//! ```
//! use top_products::domain::value_objects::custom_id::CustomId;
//!
//! let id = CustomId::new("Laptop", 5);
//! assert_eq!(id.to_string(), "Laptop-5");
//!
//! let parsed = CustomId::parse("Laptop", "Laptop-5").unwrap();
//! assert_eq!(parsed.position(), 5);
//! assert!(CustomId::parse("Phone", "Laptop-5").is_none());
//! ```

use serde::Serialize;
use std::fmt;

/// Synthetic identifier for an item of a category's ranked aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CustomId {
    category: String,
    position: usize,
}

impl CustomId {
    /// Creates the identifier for the given category and zero-based position.
    #[must_use]
    pub fn new(category: impl Into<String>, position: usize) -> Self {
        Self {
            category: category.into(),
            position,
        }
    }

    /// Parses a raw identifier back into a position within `category`.
    ///
    /// Returns `None` if the identifier does not belong to the category or
    /// its suffix is not a valid position. A failed parse is a normal
    /// outcome, not an error.
    #[must_use]
    pub fn parse(category: &str, raw: &str) -> Option<Self> {
        let suffix = raw.strip_prefix(category)?.strip_prefix('-')?;
        let position = suffix.parse::<usize>().ok()?;
        Some(Self::new(category, position))
    }

    /// Returns the category this identifier belongs to.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the zero-based position within the full ranked aggregation.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for CustomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.position)
    }
}

impl From<CustomId> for String {
    fn from(id: CustomId) -> Self {
        id.to_string()
    }
}
