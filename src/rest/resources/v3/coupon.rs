//! Coupon resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Coupon, CouponListParams, DiscountType};
//!
//! let coupon = client
//!     .coupons()
//!     .create(&Coupon {
//!         code: Some("10off".to_string()),
//!         discount_type: Some(DiscountType::Percent),
//!         amount: Some("10".to_string()),
//!         individual_use: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let found = client
//!     .coupons()
//!     .list(&CouponListParams { code: Some("10off".to_string()), ..Default::default() })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, MetaData, SortOrder};
use crate::rest::Resource;

/// How a coupon's `amount` is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// A percentage off the cart.
    Percent,
    /// A fixed amount off the cart total.
    #[default]
    FixedCart,
    /// A fixed amount off each matching product.
    FixedProduct,
}

/// A discount coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Coupon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The code customers enter. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Discount amount, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_expires: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_expires_gmt: Option<NaiveDateTime>,

    /// Times the coupon has been used.
    #[serde(skip_serializing)]
    pub usage_count: Option<u64>,

    /// Whether the coupon can not be combined with other coupons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_use: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_product_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit_per_user: Option<u64>,

    /// Max number of items the discount applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_usage_to_x_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_categories: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_product_categories: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_sale_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<String>,

    /// Billing emails allowed to use the coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_restrictions: Option<Vec<String>>,

    /// Customers who have used the coupon, by id or email.
    #[serde(skip_serializing)]
    pub used_by: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Coupon {
    type GetParams = CouponGetParams;
    type ListParams = CouponListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Coupon";
    const COLLECTION: &'static str = "coupons";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CouponGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing coupons.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CouponListParams {
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

    /// One of `date`, `id`, `include`, `title`, `slug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    /// Limit to the coupon with this code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
