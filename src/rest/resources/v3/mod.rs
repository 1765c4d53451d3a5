//! Resources for the `wc/v3` API.
//!
//! # Available Resources
//!
//! | Record | Collection |
//! |---|---|
//! | [`Product`] | `products` |
//! | [`ProductVariation`] | `products/{product_id}/variations` |
//! | [`Category`] | `products/categories` |
//! | [`Tag`] | `products/tags` |
//! | [`Coupon`] | `coupons` |
//! | [`Customer`] | `customers` |
//! | [`Order`] | `orders` |
//! | [`OrderNote`] | `orders/{order_id}/notes` |
//! | [`Refund`] | `orders/{order_id}/refunds` |
//! | [`Webhook`] | `webhooks` |
//!
//! Each record comes with `*GetParams` and `*ListParams` types; most use
//! [`ForceDeleteParams`](common::ForceDeleteParams) for deletion.
//!
//! ## Field conventions
//!
//! - Every field is an `Option`; `None` is never sent, `Some` is sent as is
//! - Server-computed fields are read-only and skipped when serializing
//! - Money amounts are decimal strings
//! - Dates are `NaiveDateTime`; `*_gmt` variants carry the UTC value

pub mod common;

mod category;
mod coupon;
mod customer;
mod order;
mod order_note;
mod product;
mod product_variation;
mod refund;
mod tag;
mod webhook;

pub use common::{
    Billing, Context, ContextParams, ForceDeleteParams, Link, Links, MetaData, Shipping, SortOrder,
};
pub use category::{
    Category, CategoryDisplay, CategoryGetParams, CategoryImage, CategoryListParams, TermOrderBy,
};
pub use coupon::{Coupon, CouponGetParams, CouponListParams, DiscountType};
pub use customer::{
    Customer, CustomerDeleteParams, CustomerDownload, CustomerGetParams, CustomerListParams,
    DownloadFile,
};
pub use order::{
    CouponLine, FeeLine, LineItem, Order, OrderGetParams, OrderListParams, OrderRefundSummary,
    OrderStatus, ShippingLine, Tax, TaxLine,
};
pub use order_note::{OrderNote, OrderNoteGetParams, OrderNoteListParams, OrderNoteType};
pub use product::{
    BackorderPolicy, CatalogVisibility, Product, ProductAttribute, ProductDefaultAttribute,
    ProductDimensions, ProductDownload, ProductGetParams, ProductImage, ProductListParams,
    ProductOrderBy, ProductStatus, ProductType, StockStatus, TaxStatus, TermRef,
};
pub use product_variation::{
    ProductVariation, ProductVariationGetParams, ProductVariationListParams, VariationAttribute,
};
pub use refund::{Refund, RefundGetParams, RefundLineItem, RefundListParams, RefundTax};
pub use tag::{Tag, TagGetParams, TagListParams};
pub use webhook::{Webhook, WebhookGetParams, WebhookListParams, WebhookStatus};
