//! Product variation resource implementation.
//!
//! Variations belong to a variable product and live under
//! `products/{product_id}/variations`. Each variation picks one option per
//! variation attribute of its parent and can override price, stock and
//! shipping data.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{ProductVariation, VariationAttribute};
//!
//! let variations = client.product_variations(22);
//! let created = variations
//!     .create(&ProductVariation {
//!         regular_price: Some("9.00".to_string()),
//!         attributes: Some(vec![VariationAttribute {
//!             id: Some(6),
//!             option: Some("Black".to_string()),
//!             ..Default::default()
//!         }]),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, MetaData, SortOrder};
use super::product::{
    BackorderPolicy, ProductDimensions, ProductDownload, ProductImage, ProductStatus, StockStatus,
    TaxStatus,
};
use crate::rest::Resource;

/// The attribute option a variation selects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariationAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The selected term name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// A variation of a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariation {
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing)]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    /// Only `private` and `publish` are meaningful for variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<TaxStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Stock management at variation level. The server may report `"parent"`
    /// here, so the raw JSON value is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<BackorderPolicy>,

    #[serde(skip_serializing)]
    pub backorders_allowed: Option<bool>,

    #[serde(skip_serializing)]
    pub backordered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_class_id: Option<u64>,

    /// A single image; variations have no gallery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<VariationAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for ProductVariation {
    type GetParams = ProductVariationGetParams;
    type ListParams = ProductVariationListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "ProductVariation";
    const COLLECTION: &'static str = "products/{product_id}/variations";
    const PARENT_ID: Option<&'static str> = Some("product_id");

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariationGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing variations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariationListParams {
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variation_collection_is_nested_under_product() {
        assert_eq!(
            ProductVariation::collection_path(Some(22)),
            "products/22/variations"
        );
    }

    #[test]
    fn test_manage_stock_accepts_parent() {
        let variation: ProductVariation = serde_json::from_value(json!({
            "id": 732,
            "manage_stock": "parent",
            "attributes": [{"id": 6, "name": "Color", "option": "Black"}]
        }))
        .unwrap();

        assert_eq!(variation.manage_stock, Some(json!("parent")));
        assert_eq!(
            variation.attributes.unwrap()[0].option.as_deref(),
            Some("Black")
        );
    }

    #[test]
    fn test_variation_update_body() {
        let variation = ProductVariation {
            regular_price: Some("10.00".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&variation).unwrap(),
            json!({"regular_price": "10.00"})
        );
    }
}
