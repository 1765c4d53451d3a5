//! WooCommerce resource records and their query parameters.
//!
//! Records are organized by API version. The latest version is re-exported
//! here:
//!
//! ```rust
//! use woocommerce_api::rest::resources::Product; // wc/v3
//! use woocommerce_api::rest::resources::v3::Order;
//! ```
//!
//! Records for older API versions are not provided; a client configured for
//! `wc/v1` or `wc/v2` sends these records to the older endpoints, which
//! accept the same shapes for the fields they know.

pub mod v3;

pub use v3::*;
