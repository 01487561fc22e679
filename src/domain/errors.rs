//! # Domain Errors
//!
//! Validation errors raised by domain value object constructors.
//!
//! These represent malformed caller input, not upstream vendor failures.
//! The API layer maps them to client error responses.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Page numbers are 1-based.
    #[error("page number must be at least 1, got {0}")]
    InvalidPageNumber(u32),

    /// A page must hold at least one item.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),

    /// Price bounds must be non-negative.
    #[error("price bound must be non-negative, got {0}")]
    NegativePrice(f64),

    /// The lower price bound must not exceed the upper bound.
    #[error("minPrice {min} exceeds maxPrice {max}")]
    InvertedPriceBounds {
        /// Lower bound supplied by the caller.
        min: f64,
        /// Upper bound supplied by the caller.
        max: f64,
    },

    /// Categories are path parameters and must be non-empty.
    #[error("category must not be empty")]
    EmptyCategory,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Validates a category name.
///
/// # Errors
///
/// Returns [`DomainError::EmptyCategory`] if the name is empty or whitespace.
pub fn validate_category(category: &str) -> DomainResult<()> {
    if category.trim().is_empty() {
        return Err(DomainError::EmptyCategory);
    }
    Ok(())
}
