//! The `_links` block returned with every record.

use serde::{Deserialize, Serialize};

/// A hypermedia link.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// The link target.
    #[serde(default)]
    pub href: String,
}

/// Links to related endpoints. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Links {
    /// The record itself.
    #[serde(rename = "self", default)]
    pub self_: Vec<Link>,

    /// The record's collection.
    #[serde(default)]
    pub collection: Vec<Link>,

    /// The parent record, for nested resources.
    #[serde(default)]
    pub up: Vec<Link>,

    /// The customer, on orders.
    #[serde(default)]
    pub customer: Vec<Link>,
}
