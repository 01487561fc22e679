//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations of the aggregation system:
//!
//! - [`Vendor`] - the fixed set of upstream product sources
//! - [`SortField`] - numeric product fields a listing can be sorted by
//! - [`SortOrder`] - ascending or descending sort direction
//! - [`SortSpec`] - a field/direction pair
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, and Serde traits; [`Vendor`] and [`SortField`] also implement
//! `FromStr` with strict parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0}: {1}")]
pub struct ParseEnumError(pub &'static str, pub String);

/// An upstream product vendor, identified by its short code.
///
/// The vendor set is fixed: it defines both the fan-out targets of an
/// aggregation and the order in which per-vendor results are concatenated.
///
/// # Examples
///
/// ```
/// use top_products::domain::value_objects::enums::Vendor;
///
/// assert_eq!(Vendor::Amz.to_string(), "AMZ");
/// assert_eq!("FLP".parse::<Vendor>(), Ok(Vendor::Flp));
/// assert_eq!(Vendor::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Vendor {
    /// Vendor code `AMZ`.
    Amz = 0,
    /// Vendor code `FLP`.
    Flp = 1,
    /// Vendor code `SNP`.
    Snp = 2,
    /// Vendor code `MYN`.
    Myn = 3,
    /// Vendor code `AZO`.
    Azo = 4,
}

impl Vendor {
    /// All supported vendors, in fan-out and concatenation order.
    pub const ALL: [Vendor; 5] = [
        Vendor::Amz,
        Vendor::Flp,
        Vendor::Snp,
        Vendor::Myn,
        Vendor::Azo,
    ];

    /// Returns the vendor's short code as used in upstream request paths.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Amz => "AMZ",
            Self::Flp => "FLP",
            Self::Snp => "SNP",
            Self::Myn => "MYN",
            Self::Azo => "AZO",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Vendor {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AMZ" => Ok(Self::Amz),
            "FLP" => Ok(Self::Flp),
            "SNP" => Ok(Self::Snp),
            "MYN" => Ok(Self::Myn),
            "AZO" => Ok(Self::Azo),
            _ => Err(ParseEnumError("Vendor", s.to_string())),
        }
    }
}

/// A numeric product field a listing can be sorted by.
///
/// Only numeric fields have a meaningful total order; anything else supplied
/// by a caller is a validation error, never a silent default.
///
/// # Examples
///
/// ```
/// use top_products::domain::value_objects::enums::SortField;
///
/// assert_eq!("rating".parse::<SortField>(), Ok(SortField::Rating));
/// assert!("name".parse::<SortField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SortField {
    /// Sort by `price`.
    #[default]
    Price = 0,
    /// Sort by `rating`.
    Rating = 1,
    /// Sort by `discount`.
    Discount = 2,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "price"),
            Self::Rating => write!(f, "rating"),
            Self::Discount => write!(f, "discount"),
        }
    }
}

impl FromStr for SortField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "discount" => Ok(Self::Discount),
            _ => Err(ParseEnumError("SortField", s.to_string())),
        }
    }
}

/// Sort direction.
///
/// Per the listing contract, the literal `asc` selects ascending order and
/// any other supplied value selects descending; [`SortOrder::from_param`]
/// encodes that rule. An absent parameter defaults to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SortOrder {
    /// Ascending order (`asc`).
    #[default]
    Ascending = 0,
    /// Descending order (`desc`).
    Descending = 1,
}

impl SortOrder {
    /// Interprets a caller-supplied direction parameter.
    ///
    /// `"asc"` yields [`SortOrder::Ascending`]; any other value yields
    /// [`SortOrder::Descending`].
    #[inline]
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        if raw == "asc" {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Returns true if this is ascending order.
    #[inline]
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// A complete sort specification: field plus direction.
///
/// The default (`price` ascending) matches the listing defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to compare.
    pub field: SortField,
    /// The direction of the resulting order.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}
