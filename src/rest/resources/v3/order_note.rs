//! Order note resource implementation.
//!
//! Notes live under `orders/{order_id}/notes`. A note is private to the store
//! unless `customer_note` is set, in which case the customer is emailed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links};
use crate::rest::Resource;

/// A note on an order.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::OrderNote;
///
/// let note = OrderNote {
///     note: Some("Order ok!!!".to_string()),
///     customer_note: Some(false),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&note).unwrap();
/// assert_eq!(json, serde_json::json!({"note": "Order ok!!!", "customer_note": false}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Who wrote the note; `system` for automatic notes.
    #[serde(skip_serializing)]
    pub author: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// Note content. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the note is shown to (and emailed to) the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<bool>,

    /// Write-only. Attribute the note to the current user instead of the
    /// system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by_user: Option<bool>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for OrderNote {
    type GetParams = OrderNoteGetParams;
    type ListParams = OrderNoteListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "OrderNote";
    const COLLECTION: &'static str = "orders/{order_id}/notes";
    const PARENT_ID: Option<&'static str> = Some("order_id");

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Which notes to list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderNoteType {
    #[default]
    Any,
    Customer,
    Internal,
}

/// Parameters for fetching a single note.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderNoteGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing notes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderNoteListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Serialized as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<OrderNoteType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encode_query;

    #[test]
    fn test_note_collection_is_nested_under_order() {
        assert_eq!(OrderNote::collection_path(Some(723)), "orders/723/notes");
    }

    #[test]
    fn test_note_type_filter() {
        let params = OrderNoteListParams {
            note_type: Some(OrderNoteType::Customer),
            ..Default::default()
        };
        assert_eq!(encode_query(&params).unwrap(), "type=customer");
    }
}
