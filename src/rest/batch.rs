//! Batch envelopes.
//!
//! WooCommerce accepts up to 100 creates, updates and deletes of one resource
//! type in a single `POST {collection}/batch`. Updates identify their target by
//! the record's own `id`; deletes are plain ids.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::BatchRequest;
//! use woocommerce_api::rest::resources::Coupon;
//!
//! let request = BatchRequest::<Coupon>::new()
//!     .create(vec![Coupon { code: Some("spring".into()), ..Default::default() }])
//!     .delete(vec![41, 42]);
//!
//! let body = serde_json::to_value(&request).unwrap();
//! assert!(body.get("update").is_none());
//! assert_eq!(body["delete"], serde_json::json!([41, 42]));
//! ```

use serde::{Deserialize, Serialize};

/// A batch of creates, updates and deletes for one resource type.
///
/// Empty slots are omitted from the request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRequest<R> {
    /// Records to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<R>>,
    /// Records to update, each carrying its `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<R>>,
    /// Ids to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<u64>>,
}

impl<R> Default for BatchRequest<R> {
    fn default() -> Self {
        Self {
            create: None,
            update: None,
            delete: None,
        }
    }
}

impl<R> BatchRequest<R> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records to create.
    #[must_use]
    pub fn create(mut self, records: Vec<R>) -> Self {
        self.create = Some(records);
        self
    }

    /// Sets the records to update.
    #[must_use]
    pub fn update(mut self, records: Vec<R>) -> Self {
        self.update = Some(records);
        self
    }

    /// Sets the ids to delete.
    #[must_use]
    pub fn delete(mut self, ids: Vec<u64>) -> Self {
        self.delete = Some(ids);
        self
    }

    /// Returns `true` if no slot holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.create.as_ref().map_or(true, Vec::is_empty)
            && self.update.as_ref().map_or(true, Vec::is_empty)
            && self.delete.as_ref().map_or(true, Vec::is_empty)
    }
}

/// The server's answer to a [`BatchRequest`].
///
/// Each slot holds full records; deleted records come back in their last
/// known state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchResponse<R> {
    /// Records created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Vec<R>>,
    /// Records updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<R>>,
    /// Records deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Vec<R>>,
}

impl<R> Default for BatchResponse<R> {
    fn default() -> Self {
        Self {
            create: None,
            update: None,
            delete: None,
        }
    }
}

impl<R> BatchResponse<R> {
    /// Returns the created records, or an empty slice.
    #[must_use]
    pub fn created(&self) -> &[R] {
        self.create.as_deref().unwrap_or_default()
    }

    /// Returns the updated records, or an empty slice.
    #[must_use]
    pub fn updated(&self) -> &[R] {
        self.update.as_deref().unwrap_or_default()
    }

    /// Returns the deleted records, or an empty slice.
    #[must_use]
    pub fn deleted(&self) -> &[R] {
        self.delete.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
    struct Tag {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[test]
    fn test_empty_batch_serializes_to_empty_object() {
        let request = BatchRequest::<Tag>::new();
        assert!(request.is_empty());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_batch_request_keeps_partition() {
        let request = BatchRequest::new()
            .create(vec![Tag {
                id: None,
                name: Some("new".into()),
            }])
            .update(vec![Tag {
                id: Some(7),
                name: Some("renamed".into()),
            }])
            .delete(vec![9]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "create": [{"name": "new"}],
                "update": [{"id": 7, "name": "renamed"}],
                "delete": [9]
            })
        );
    }

    #[test]
    fn test_batch_response_with_missing_slots() {
        let response: BatchResponse<Tag> =
            serde_json::from_value(json!({"delete": [{"id": 9, "name": "old"}]})).unwrap();

        assert!(response.created().is_empty());
        assert!(response.updated().is_empty());
        assert_eq!(response.deleted()[0].id, Some(9));
    }
}
