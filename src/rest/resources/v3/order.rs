//! Order resource implementation.
//!
//! Orders carry the full checkout state: line items, tax, shipping, fee and
//! coupon lines, addresses and a summary of refunds. Notes and refunds are
//! nested resources under `orders/{order_id}` (see
//! [`OrderNote`](super::OrderNote) and [`Refund`](super::Refund)).
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{LineItem, Order, OrderListParams, OrderStatus};
//!
//! let order = client
//!     .orders()
//!     .create(&Order {
//!         payment_method: Some("bacs".to_string()),
//!         set_paid: Some(true),
//!         line_items: Some(vec![LineItem {
//!             product_id: Some(93),
//!             quantity: Some(2),
//!             ..Default::default()
//!         }]),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let open = client
//!     .orders()
//!     .list(&OrderListParams {
//!         status: Some(vec![OrderStatus::Processing, OrderStatus::OnHold]),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Billing, Context, ForceDeleteParams, Links, MetaData, Shipping, SortOrder};
use crate::rest::Resource;

/// The status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Awaiting payment.
    #[default]
    Pending,
    /// Paid, awaiting fulfillment.
    Processing,
    /// Awaiting action by the store.
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    /// Payment failed or was declined.
    Failed,
    Trash,
    /// Created by the block checkout, not yet submitted.
    CheckoutDraft,
    /// Only valid as a list filter.
    Any,
}

impl OrderStatus {
    /// Returns the status as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
            Self::Trash => "trash",
            Self::CheckoutDraft => "checkout-draft",
            Self::Any => "any",
        }
    }
}

/// A tax amount on a line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tax {
    /// Tax rate id.
    pub id: Option<u64>,
    pub total: Option<String>,
    pub subtotal: Option<String>,
}

/// A product line on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// Item id; set it to update or remove an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<u64>,

    /// Quantity; 0 removes an existing line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Line subtotal before discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    #[serde(skip_serializing)]
    pub subtotal_tax: Option<String>,

    /// Line total after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    #[serde(skip_serializing)]
    pub taxes: Option<Vec<Tax>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(skip_serializing)]
    pub sku: Option<String>,

    /// Unit price. Read-only; the server reports it as a number.
    #[serde(skip_serializing)]
    pub price: Option<f64>,
}

/// A tax line on an order. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    pub id: Option<u64>,
    /// Tax rate code.
    pub rate_code: Option<String>,
    pub rate_id: Option<u64>,
    pub label: Option<String>,
    /// Whether this is a compound tax rate.
    pub compound: Option<bool>,
    pub tax_total: Option<String>,
    pub shipping_tax_total: Option<String>,
    pub rate_percent: Option<f64>,
    pub meta_data: Option<Vec<MetaData>>,
}

/// A shipping line on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Shipping method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_title: Option<String>,

    /// Shipping method id, e.g. `flat_rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    #[serde(skip_serializing)]
    pub taxes: Option<Vec<Tax>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A fee line on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeeLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// `taxable` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    #[serde(skip_serializing)]
    pub taxes: Option<Vec<Tax>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A coupon applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CouponLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The coupon code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing)]
    pub discount: Option<String>,

    #[serde(skip_serializing)]
    pub discount_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// A refund as summarized on its order. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderRefundSummary {
    pub id: Option<u64>,
    pub reason: Option<String>,
    /// Refunded amount, negative.
    pub total: Option<String>,
}

/// An order.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `number`, `order_key`, `version`, dates, all `*_total` and `*_tax`
///   amounts, `prices_include_tax`, `customer_ip_address`,
///   `customer_user_agent`, `date_paid`, `date_completed`, `cart_hash`,
///   `tax_lines`, `refunds`, `_links`
///
/// ## Write-Only Fields
/// - `set_paid`: marks the order paid and moves it to `processing`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing)]
    pub number: Option<String>,

    #[serde(skip_serializing)]
    pub order_key: Option<String>,

    /// How the order was created, e.g. `checkout` or `rest-api`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_via: Option<String>,

    /// WooCommerce version that last updated the order.
    #[serde(skip_serializing)]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub discount_total: Option<String>,

    #[serde(skip_serializing)]
    pub discount_tax: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_total: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_tax: Option<String>,

    #[serde(skip_serializing)]
    pub cart_tax: Option<String>,

    #[serde(skip_serializing)]
    pub total: Option<String>,

    #[serde(skip_serializing)]
    pub total_tax: Option<String>,

    #[serde(skip_serializing)]
    pub prices_include_tax: Option<bool>,

    /// User id of the customer; 0 for guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing)]
    pub customer_ip_address: Option<String>,

    #[serde(skip_serializing)]
    pub customer_user_agent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    /// Payment method id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_title: Option<String>,

    /// Gateway transaction id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing)]
    pub date_paid: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_paid_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_completed: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_completed_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub cart_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing)]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_lines: Option<Vec<FeeLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_lines: Option<Vec<CouponLine>>,

    #[serde(skip_serializing)]
    pub refunds: Option<Vec<OrderRefundSummary>>,

    /// Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_paid: Option<bool>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Order {
    type GetParams = OrderGetParams;
    type ListParams = OrderListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Order";
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Number of decimal points to round amounts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Orders created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    /// Orders created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_after: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_before: Option<NaiveDateTime>,

    /// Interpret `after`/`before` as GMT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates_are_gmt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// One of `date`, `modified`, `id`, `include`, `title`, `slug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    /// One or more statuses, sent comma-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<OrderStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,

    /// Orders containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}
