//! Customer resource implementation.
//!
//! Besides the uniform operations, customers expose their downloadable
//! files through [`Service::downloads`](crate::rest::Service::downloads).
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Customer, CustomerDeleteParams, CustomerListParams};
//!
//! let customers = client.customers();
//! let found = customers
//!     .list(&CustomerListParams { email: Some("john.doe@example.com".into()), ..Default::default() })
//!     .await?;
//!
//! // Customers can not be trashed; reassign their posts to user 1
//! customers
//!     .delete(25, &CustomerDeleteParams { force: Some(true), reassign: Some(1) })
//!     .await?;
//!
//! for download in customers.downloads(25).await?.iter() {
//!     println!("{:?}", download.download_url);
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Billing, Context, Links, MetaData, Shipping, SortOrder};
use crate::rest::Resource;

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Email address. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// WordPress role, usually `customer`.
    #[serde(skip_serializing)]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    /// Whether the customer has placed an order.
    #[serde(skip_serializing)]
    pub is_paying_customer: Option<bool>,

    #[serde(skip_serializing)]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Customer {
    type GetParams = CustomerGetParams;
    type ListParams = CustomerListParams;
    type DeleteParams = CustomerDeleteParams;

    const NAME: &'static str = "Customer";
    const COLLECTION: &'static str = "customers";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The file behind a [`CustomerDownload`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DownloadFile {
    pub name: Option<String>,
    pub file: Option<String>,
}

/// A file a customer is allowed to download. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerDownload {
    /// Signed download link.
    pub download_url: Option<String>,
    /// Download id (an MD5 hash).
    pub download_id: Option<String>,
    pub product_id: Option<u64>,
    pub product_name: Option<String>,
    pub download_name: Option<String>,
    pub order_id: Option<u64>,
    pub order_key: Option<String>,
    /// Remaining downloads, or `"unlimited"`.
    pub downloads_remaining: Option<String>,
    /// Expiry date, or `"never"`.
    pub access_expires: Option<String>,
    pub access_expires_gmt: Option<String>,
    pub file: Option<DownloadFile>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

/// Parameters for fetching a single customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing customers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// One of `id`, `include`, `name`, `registered_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// WordPress role; `all` lists every user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Parameters for deleting a customer.
///
/// Customers do not support trashing, so `force` must be `true`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerDeleteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,

    /// User id to reassign the deleted customer's posts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassign: Option<u64>,
}
