//! # top-products
//!
//! Multi-vendor product listing aggregator.
//!
//! For a requested category, the service fetches product listings from
//! several independent upstream vendors concurrently, merges whatever
//! arrives into one collection, applies a stable sort and pagination, and
//! returns the page with synthetic per-item identifiers usable for later
//! point lookups.
//!
//! # Architecture
//!
//! - [`domain`]: products, vendors, sort/page parameters, identifiers
//! - [`application`]: the aggregation pipeline (fan-out, rank, paginate,
//!   identify) and its error taxonomy
//! - [`infrastructure`]: authenticated HTTP clients for the vendor API
//! - [`api`]: the REST surface
//! - [`config`]: immutable process configuration
//!
//! # Degradation over failure
//!
//! A vendor that times out, errors, or returns garbage contributes zero
//! items; the listing shrinks instead of failing. Only malformed caller
//! input produces an error response.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
