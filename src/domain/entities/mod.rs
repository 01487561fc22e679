//! # Domain Entities
//!
//! Core value types of the aggregation domain.

pub mod product;

pub use product::Product;
