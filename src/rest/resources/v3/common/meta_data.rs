//! Record meta data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A key/value pair attached to a record.
///
/// Values are arbitrary JSON; plugins store strings, numbers and whole
/// objects here. Setting `value` on an existing `id` updates it, and a new
/// `key` without an `id` adds an entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetaData {
    /// Meta id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Meta key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Meta value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Human-readable key, only present on order line items.
    #[serde(skip_serializing)]
    pub display_key: Option<String>,

    /// Human-readable value, only present on order line items.
    #[serde(skip_serializing)]
    pub display_value: Option<Value>,
}

impl MetaData {
    /// Creates a new entry for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}
