//! Webhook resource implementation.
//!
//! A webhook subscribes a delivery URL to a topic such as `order.created`.
//! WooCommerce signs every delivery with the webhook's `secret`; see
//! [`crate::webhooks`] for verification.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Webhook, WebhookStatus};
//!
//! let webhook = client
//!     .webhooks()
//!     .create(&Webhook {
//!         name: Some("Order created".to_string()),
//!         topic: Some("order.created".to_string()),
//!         delivery_url: Some("https://example.com/hooks/orders".to_string()),
//!         secret: Some("s3cr3t".to_string()),
//!         status: Some(WebhookStatus::Active),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, SortOrder};
use crate::rest::Resource;

/// Delivery status of a webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    /// Deliveries are sent.
    #[default]
    Active,
    /// Deliveries are paused by the store.
    Paused,
    /// Deliveries were disabled after repeated failures.
    Disabled,
}

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// A friendly name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,

    /// `resource.event`, e.g. `order.created`. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(skip_serializing)]
    pub resource: Option<String>,

    #[serde(skip_serializing)]
    pub event: Option<String>,

    /// Action hooks that trigger a delivery.
    #[serde(skip_serializing)]
    pub hooks: Option<Vec<String>>,

    /// URL deliveries are posted to. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<String>,

    /// Signing secret. Defaults to a hash of the current user's API
    /// credentials when not set on create. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Webhook {
    type GetParams = WebhookGetParams;
    type ListParams = WebhookListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Webhook";
    const COLLECTION: &'static str = "webhooks";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single webhook.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookListParams {
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

    /// One of `date`, `id`, `include`, `title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    /// Filter by status; `all` is accepted by the server as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encode_query;
    use serde_json::json;

    #[test]
    fn test_webhook_deserializes_from_api_response() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": 142,
            "name": "Order updated",
            "status": "disabled",
            "topic": "order.updated",
            "resource": "order",
            "event": "updated",
            "hooks": ["woocommerce_process_shop_order_meta", "woocommerce_api_edit_order"],
            "delivery_url": "http://requestb.in/1exdwip1",
            "date_created": "2017-03-21T17:07:11"
        }))
        .unwrap();

        assert_eq!(webhook.status, Some(WebhookStatus::Disabled));
        assert_eq!(webhook.hooks.as_ref().unwrap().len(), 2);

        let body = serde_json::to_value(&webhook).unwrap();
        assert!(body.get("resource").is_none());
        assert_eq!(body["topic"], "order.updated");
    }

    #[test]
    fn test_webhook_status_filter() {
        let params = WebhookListParams {
            status: Some(WebhookStatus::Paused),
            ..Default::default()
        };
        assert_eq!(encode_query(&params).unwrap(), "status=paused");
    }
}
