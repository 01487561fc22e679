//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity
//!
//! - [`CustomId`]: synthetic per-item identifier derived from category and
//!   ranked position
//!
//! ## Request Parameters
//!
//! - [`PageRequest`]: validated 1-based page plus size
//! - [`PriceBounds`]: validated optional price range
//! - [`SortSpec`]: sort field plus direction
//!
//! ## Domain Enums
//!
//! - [`Vendor`]: the fixed set of upstream product sources
//! - [`SortField`], [`SortOrder`]: listing sort parameters

pub mod bounds;
pub mod custom_id;
pub mod enums;
pub mod page;

pub use bounds::PriceBounds;
pub use custom_id::CustomId;
pub use enums::{ParseEnumError, SortField, SortOrder, SortSpec, Vendor};
pub use page::PageRequest;
