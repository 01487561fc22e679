//! # Vendor Integrations
//!
//! Outbound side of the system: one authenticated HTTP call per vendor.
//!
//! - [`traits`]: the [`VendorClient`](traits::VendorClient) port
//! - [`remote`]: the HTTP implementation
//! - [`http_client`]: shared bearer-auth HTTP wrapper
//! - [`error`]: typed vendor failure taxonomy

pub mod error;
pub mod http_client;
pub mod remote;
pub mod traits;

pub use error::{VendorError, VendorResult};
pub use remote::HttpVendorClient;
pub use traits::{VendorClient, VendorQuery};
