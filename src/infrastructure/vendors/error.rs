//! # Vendor Errors
//!
//! Error types for upstream vendor operations.
//!
//! Every failure mode of a vendor fetch is represented here as a typed
//! variant. Callers of the aggregation pipeline never see these errors:
//! the aggregator collapses each failed vendor call into an empty result
//! and logs the reason. The typed representation exists so that policy is
//! an explicit decision at one boundary instead of a scattered catch-all.
//!
//! # Examples
//!
//! ```
//! use top_products::infrastructure::vendors::error::VendorError;
//!
//! let error = VendorError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = VendorError::authentication("bearer token rejected");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for vendor client operations.
#[derive(Debug, Clone, Error)]
pub enum VendorError {
    /// Request timed out.
    #[error("vendor timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("vendor connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure (401/403).
    #[error("vendor authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded (429).
    #[error("vendor rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("vendor returned status {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("vendor malformed payload: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("vendor internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl VendorError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates a non-success status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a malformed payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if this error indicates a problem with the request
    /// itself rather than the vendor.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Result type for vendor operations.
pub type VendorResult<T> = Result<T, VendorError>;
