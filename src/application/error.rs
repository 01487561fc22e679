//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Only malformed caller input surfaces as an error: vendor outages are
//! collapsed inside the aggregation pipeline and degrade the result
//! instead. A failed point lookup is likewise a distinct, normal outcome.
//!
//! # Examples
//!
//! ```
//! use top_products::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("unknown sort field: name");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("product", "Laptop-99");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain validation failure from a value object constructor.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource} with id {id}")]
    NotFound {
        /// Type of resource.
        resource: String,
        /// Resource identifier.
        id: String,
    },

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error was caused by malformed caller input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }

    /// Returns true if this is a not found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_validation() {
        let err = ApplicationError::validation("bad input");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn domain_errors_count_as_validation() {
        let err: ApplicationError = DomainError::EmptyCategory.into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn not_found_carries_resource_and_id() {
        let err = ApplicationError::not_found("product", "Phone-12");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("product"));
        assert!(err.to_string().contains("Phone-12"));
    }

    #[test]
    fn internal_is_neither() {
        let err = ApplicationError::internal("boom");
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
    }
}
