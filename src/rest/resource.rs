//! The resource trait.
//!
//! Every WooCommerce entity the client can manage implements [`Resource`]. The
//! trait carries no behavior of its own: it names the entity's collection path
//! and its query parameter types, and [`Service`](crate::rest::Service) derives
//! the full operation set from that.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use woocommerce_api::rest::Resource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
//! pub struct ShippingZone {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//!
//! impl Resource for ShippingZone {
//!     type GetParams = ();
//!     type ListParams = ();
//!     type DeleteParams = ();
//!
//!     const NAME: &'static str = "ShippingZone";
//!     const COLLECTION: &'static str = "shipping/zones";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! assert_eq!(ShippingZone::collection_path(None), "shipping/zones");
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::rest::build_path;

/// A WooCommerce entity reachable under a collection path.
///
/// # Associated Types
///
/// - `GetParams`: query parameters for fetching one record (use `()` if none)
/// - `ListParams`: filters and pagination for listing
/// - `DeleteParams`: query parameters for deletion, usually `force`
///
/// # Associated Constants
///
/// - `NAME`: the entity name, used in log fields
/// - `COLLECTION`: the collection path relative to the versioned base URL,
///   with a `{placeholder}` for the parent id of nested resources
/// - `PARENT_ID`: the placeholder name, for nested resources
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    /// Query parameters for `get_with_params()`.
    type GetParams: Serialize + Default + Send + Sync;

    /// Filters and pagination for `list()`.
    type ListParams: Serialize + Default + Send + Sync;

    /// Query parameters for `delete()`.
    type DeleteParams: Serialize + Default + Send + Sync;

    /// The entity name (e.g. "Order").
    const NAME: &'static str;

    /// The collection path template (e.g. "orders/{order_id}/notes").
    const COLLECTION: &'static str;

    /// The placeholder in `COLLECTION` naming the parent id, if nested.
    const PARENT_ID: Option<&'static str> = None;

    /// Returns the record's id, or `None` for a record not yet created.
    fn id(&self) -> Option<u64>;

    /// Resolves the collection path, filling in the parent id of nested
    /// resources.
    #[must_use]
    fn collection_path(parent_id: Option<u64>) -> String {
        match (Self::PARENT_ID, parent_id) {
            (Some(key), Some(id)) => {
                let mut ids = HashMap::new();
                ids.insert(key, id);
                build_path(Self::COLLECTION, &ids)
            }
            _ => Self::COLLECTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, Default)]
    struct Note {
        id: Option<u64>,
    }

    impl Resource for Note {
        type GetParams = ();
        type ListParams = ();
        type DeleteParams = ();

        const NAME: &'static str = "Note";
        const COLLECTION: &'static str = "orders/{order_id}/notes";
        const PARENT_ID: Option<&'static str> = Some("order_id");

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    #[test]
    fn test_nested_collection_path_fills_parent() {
        assert_eq!(Note::collection_path(Some(723)), "orders/723/notes");
    }

    #[test]
    fn test_nested_collection_path_without_parent_keeps_template() {
        assert_eq!(Note::collection_path(None), "orders/{order_id}/notes");
    }

    #[test]
    fn test_id_accessor() {
        assert_eq!(Note { id: Some(4) }.id(), Some(4));
        assert_eq!(Note::default().id(), None);
    }
}
