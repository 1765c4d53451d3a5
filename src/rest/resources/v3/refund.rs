//! Order refund resource implementation.
//!
//! Refunds live under `orders/{order_id}/refunds`. Creating a refund with
//! `api_refund` set asks the payment gateway to return the money; otherwise
//! the refund is only recorded.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::Refund;
//!
//! let refund = client
//!     .refunds(723)
//!     .create(&Refund {
//!         amount: Some("10.00".to_string()),
//!         reason: Some("Damaged in transit".to_string()),
//!         api_refund: Some(false),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, MetaData, SortOrder};
use crate::rest::Resource;

/// A tax amount refunded on a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundTax {
    /// Tax rate id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    /// Amount to refund for this tax, when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_total: Option<f64>,
}

/// A refunded line item.
///
/// When creating a refund, `id` names the order's line item and
/// `refund_total` the amount to refund on it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub name: Option<String>,

    #[serde(skip_serializing)]
    pub product_id: Option<u64>,

    #[serde(skip_serializing)]
    pub variation_id: Option<u64>,

    /// Refunded quantity, negative in responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing)]
    pub tax_class: Option<String>,

    #[serde(skip_serializing)]
    pub subtotal: Option<String>,

    #[serde(skip_serializing)]
    pub subtotal_tax: Option<String>,

    #[serde(skip_serializing)]
    pub total: Option<String>,

    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<RefundTax>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(skip_serializing)]
    pub sku: Option<String>,

    #[serde(skip_serializing)]
    pub price: Option<f64>,

    /// Amount to refund for this item, when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_total: Option<f64>,
}

/// A refund of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Refund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    /// Refund amount, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// User id of the person who issued the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_by: Option<u64>,

    /// Whether the gateway processed the refund.
    #[serde(skip_serializing)]
    pub refunded_payment: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<RefundLineItem>>,

    /// Write-only. Refund through the payment gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_refund: Option<bool>,

    /// Write-only. Return refunded items to stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_restock: Option<bool>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Refund {
    type GetParams = RefundGetParams;
    type ListParams = RefundListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Refund";
    const COLLECTION: &'static str = "orders/{order_id}/refunds";
    const PARENT_ID: Option<&'static str> = Some("order_id");

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Number of decimal points to round amounts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}

/// Parameters for listing refunds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refund_collection_is_nested_under_order() {
        assert_eq!(Refund::collection_path(Some(723)), "orders/723/refunds");
    }

    #[test]
    fn test_refund_create_body_with_line_items() {
        let refund = Refund {
            amount: Some("30.00".to_string()),
            line_items: Some(vec![RefundLineItem {
                id: Some(111),
                quantity: Some(1),
                refund_total: Some(10.0),
                taxes: Some(vec![RefundTax {
                    id: Some(223),
                    refund_total: Some(0.5),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&refund).unwrap(),
            json!({
                "amount": "30.00",
                "line_items": [{
                    "id": 111,
                    "quantity": 1,
                    "taxes": [{"id": 223, "refund_total": 0.5}],
                    "refund_total": 10.0
                }]
            })
        );
    }

    #[test]
    fn test_refund_deserializes_from_api_response() {
        let refund: Refund = serde_json::from_value(json!({
            "id": 726,
            "date_created": "2017-03-21T17:07:11",
            "amount": "10.00",
            "reason": "",
            "refunded_by": 1,
            "refunded_payment": false,
            "meta_data": [],
            "line_items": [{
                "id": 314,
                "name": "Woo Album #2",
                "product_id": 87,
                "quantity": -1,
                "subtotal": "-9.00",
                "total": "-9.00",
                "taxes": [],
                "price": -9
            }]
        }))
        .unwrap();

        let item = &refund.line_items.unwrap()[0];
        assert_eq!(item.quantity, Some(-1));
        assert_eq!(item.price, Some(-9.0));
        assert_eq!(refund.refunded_payment, Some(false));
    }
}
