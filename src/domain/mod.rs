//! # Domain Layer
//!
//! Core types of the product aggregation domain.
//!
//! This layer has no knowledge of HTTP, configuration, or upstream vendors'
//! wire formats. It defines:
//!
//! - [`entities`]: the [`Product`](entities::product::Product) value type
//! - [`value_objects`]: vendors, sort parameters, page requests, price
//!   bounds, and the synthetic [`CustomId`](value_objects::custom_id::CustomId)
//! - [`errors`]: validation errors raised by value object constructors

pub mod entities;
pub mod errors;
pub mod value_objects;
