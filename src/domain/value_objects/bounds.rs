//! # Price Bounds
//!
//! An optional price range forwarded to vendors as a pre-filter.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// A validated `[min, max]` price range.
///
/// The lower bound defaults to zero and the upper bound is unbounded unless
/// supplied. Bounds are advisory filters passed through to vendors; the
/// aggregator does not re-filter locally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    min: f64,
    max: Option<f64>,
}

impl PriceBounds {
    /// Creates a price range.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a bound is negative or `min` exceeds
    /// `max`.
    pub fn new(min: f64, max: Option<f64>) -> DomainResult<Self> {
        if min < 0.0 {
            return Err(DomainError::NegativePrice(min));
        }
        if let Some(max) = max {
            if max < 0.0 {
                return Err(DomainError::NegativePrice(max));
            }
            if min > max {
                return Err(DomainError::InvertedPriceBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[inline]
    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Returns the upper bound, if any.
    #[inline]
    #[must_use]
    pub const fn max(self) -> Option<f64> {
        self.max
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_above_zero() {
        let bounds = PriceBounds::default();
        assert_eq!(bounds.min(), 0.0);
        assert_eq!(bounds.max(), None);
    }

    #[test]
    fn accepts_valid_range() {
        let bounds = PriceBounds::new(10.0, Some(500.0)).unwrap();
        assert_eq!(bounds.min(), 10.0);
        assert_eq!(bounds.max(), Some(500.0));
    }

    #[test]
    fn rejects_negative_min() {
        assert!(matches!(
            PriceBounds::new(-1.0, None),
            Err(DomainError::NegativePrice(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            PriceBounds::new(100.0, Some(10.0)),
            Err(DomainError::InvertedPriceBounds { .. })
        ));
    }
}
