//! Path resolution for REST resources.
//!
//! Every resource lives under a collection path. Nested resources carry a
//! placeholder for their parent's id in the collection template, for example
//! `orders/{order_id}/notes`. [`build_path`] fills the placeholders in and
//! [`operation_path`] derives the path each operation targets:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | Create | POST | `{collection}` |
//! | Get | GET | `{collection}/{id}` |
//! | List | GET | `{collection}` |
//! | Update | PUT | `{collection}/{id}` |
//! | Delete | DELETE | `{collection}/{id}` |
//! | Batch | POST | `{collection}/batch` |
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use woocommerce_api::rest::{build_path, operation_path, ResourceOperation};
//!
//! let mut ids = HashMap::new();
//! ids.insert("order_id", 723);
//! let collection = build_path("orders/{order_id}/refunds", &ids);
//! assert_eq!(collection, "orders/723/refunds");
//!
//! assert_eq!(
//!     operation_path(ResourceOperation::Get, &collection, Some(726)),
//!     "orders/723/refunds/726"
//! );
//! assert_eq!(
//!     operation_path(ResourceOperation::Batch, &collection, None),
//!     "orders/723/refunds/batch"
//! );
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations every resource service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a resource (POST /resources).
    Create,
    /// Fetch a single resource by id (GET /resources/{id}).
    Get,
    /// List resources (GET /resources).
    List,
    /// Update a resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Create, update and delete in one request (POST /resources/batch).
    Batch,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Get | Self::List => HttpMethod::Get,
            Self::Create | Self::Batch => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns `true` if the operation addresses a single item by id.
    #[must_use]
    pub const fn targets_item(&self) -> bool {
        matches!(self, Self::Get | Self::Update | Self::Delete)
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Batch => "batch",
        }
    }
}

/// Builds a path from a template by interpolating ids.
///
/// Replaces `{name}` placeholders with values from `ids`. Placeholders with no
/// matching entry are left as they are.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

/// Returns the path an operation targets within `collection`.
///
/// `id` is only used by item operations; an item operation without an id
/// falls back to the collection path.
#[must_use]
pub fn operation_path(operation: ResourceOperation, collection: &str, id: Option<u64>) -> String {
    match (operation, id) {
        (ResourceOperation::Batch, _) => format!("{collection}/batch"),
        (op, Some(id)) if op.targets_item() => format!("{collection}/{id}"),
        _ => collection.to_string(),
    }
}
