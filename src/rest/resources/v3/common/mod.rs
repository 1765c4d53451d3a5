//! Types shared by several WooCommerce resources.
//!
//! - [`Billing`] and [`Shipping`]: address blocks on orders and customers
//! - [`MetaData`]: free-form key/value pairs attached to most records
//! - [`Links`]: the read-only `_links` block
//! - [`Context`], [`SortOrder`], [`ContextParams`], [`ForceDeleteParams`]:
//!   query parameters every collection understands

mod address;
mod links;
mod meta_data;
mod params;

pub use address::{Billing, Shipping};
pub use links::{Link, Links};
pub use meta_data::MetaData;
pub use params::{Context, ContextParams, ForceDeleteParams, SortOrder};
