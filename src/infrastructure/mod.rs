//! # Infrastructure Layer
//!
//! Adapters to the outside world. Currently a single concern: upstream
//! vendor HTTP integrations in [`vendors`].

pub mod vendors;
