//! Product resource implementation.
//!
//! Products are the goods a store sells. A product is `simple`, `grouped`,
//! `external` or `variable`; variable products carry their variations as a
//! nested resource (see [`ProductVariation`](super::ProductVariation)).
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{Product, ProductListParams, ProductType, StockStatus};
//!
//! let product = client
//!     .products()
//!     .create(&Product {
//!         name: Some("Premium Quality".to_string()),
//!         product_type: Some(ProductType::Simple),
//!         regular_price: Some("21.99".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let in_stock = client
//!     .products()
//!     .list(&ProductListParams {
//!         stock_status: Some(StockStatus::InStock),
//!         per_page: Some(100),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, MetaData, SortOrder};
use crate::rest::Resource;

/// The kind of product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// A single purchasable item.
    #[default]
    Simple,
    /// A collection of related products.
    Grouped,
    /// A product sold on another site.
    External,
    /// A product with variations (size, color, ...).
    Variable,
}

/// The publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Pending,
    Private,
    #[default]
    Publish,
    /// Scheduled for publication.
    Future,
    /// Only valid as a list filter.
    Any,
}

/// Where the product is shown in the storefront.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVisibility {
    /// Shop and search results.
    #[default]
    Visible,
    /// Shop only.
    Catalog,
    /// Search results only.
    Search,
    /// Neither.
    Hidden,
}

/// Stock availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "instock")]
    InStock,
    #[serde(rename = "outofstock")]
    OutOfStock,
    #[serde(rename = "onbackorder")]
    OnBackorder,
}

/// Whether backorders are allowed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackorderPolicy {
    /// Backorders are refused.
    #[default]
    No,
    /// Backorders are allowed and the customer is notified.
    Notify,
    /// Backorders are allowed silently.
    Yes,
}

/// How a product is taxed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    #[default]
    Taxable,
    /// Only shipping is taxed.
    Shipping,
    None,
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// Attachment id. Set it alone to reuse an existing media item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Image URL. Set it without an `id` to sideload a new image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,
}

/// Product dimensions, as strings in the store's dimension unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// A downloadable file attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDownload {
    /// File id (an MD5 hash assigned by the store).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// File name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// A reference to a category or tag on a product.
///
/// When writing, only `id` is needed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TermRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub name: Option<String>,

    #[serde(skip_serializing)]
    pub slug: Option<String>,
}

impl TermRef {
    /// A reference by id.
    #[must_use]
    pub fn id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

/// A product attribute (color, size, ...).
///
/// Global attributes have a non-zero `id`; custom attributes are matched by
/// `name` and have `id` 0.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Position on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Whether the attribute is shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Whether the attribute defines variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,

    /// Available term names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// The default attribute value preselected for a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductDefaultAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The selected term name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

/// A product in a WooCommerce store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `permalink`, `date_created`, `date_modified`, `price`, `price_html`
/// - `on_sale`, `purchasable`, `total_sales`, `backorders_allowed`,
///   `backordered`, `shipping_required`, `shipping_taxable`,
///   `average_rating`, `rating_count`, `related_ids`, `variations`,
///   `grouped_products` (writable on grouped products only), `_links`
///
/// ## Writable Fields
/// Everything else. Money is sent as strings (`"21.99"`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing)]
    pub permalink: Option<String>,

    #[serde(skip_serializing)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_created_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub date_modified_gmt: Option<NaiveDateTime>,

    /// Product type. Serialized as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_visibility: Option<CatalogVisibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Current price, derived from the regular and sale prices.
    #[serde(skip_serializing)]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    /// Start of the sale, in the site's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from_gmt: Option<NaiveDateTime>,

    /// End of the sale, in the site's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to_gmt: Option<NaiveDateTime>,

    #[serde(skip_serializing)]
    pub price_html: Option<String>,

    #[serde(skip_serializing)]
    pub on_sale: Option<bool>,

    #[serde(skip_serializing)]
    pub purchasable: Option<bool>,

    #[serde(skip_serializing)]
    pub total_sales: Option<u64>,

    /// Whether the product is intangible.
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<Vec<ProductDownload>>,

    /// Download limit; `-1` for unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,

    /// Days until a download link expires; `-1` for never.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_expiry: Option<i64>,

    /// Target URL of an external product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Button text of an external product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<TaxStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,

    /// Whether stock is managed at product level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,

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

    /// Limit to one per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_individually: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,

    #[serde(skip_serializing)]
    pub shipping_required: Option<bool>,

    #[serde(skip_serializing)]
    pub shipping_taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,

    #[serde(skip_serializing)]
    pub shipping_class_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,

    #[serde(skip_serializing)]
    pub average_rating: Option<String>,

    #[serde(skip_serializing)]
    pub rating_count: Option<u64>,

    #[serde(skip_serializing)]
    pub related_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_sell_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Note sent to the customer after purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<TermRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TermRef>>,

    /// Images; the first is the featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<Vec<ProductDefaultAttribute>>,

    /// Variation ids of a variable product.
    #[serde(skip_serializing)]
    pub variations: Option<Vec<u64>>,

    /// Child product ids of a grouped product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_products: Option<Vec<u64>>,

    /// Menu order, used to sort products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Product {
    type GetParams = ProductGetParams;
    type ListParams = ProductListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Product";
    const COLLECTION: &'static str = "products";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Fields products can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductOrderBy {
    #[default]
    Date,
    Id,
    Include,
    Title,
    Slug,
    Price,
    Popularity,
    Rating,
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Page of results (1-based, default 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page (default 10, max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Limit to results matching a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Products published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    /// Products published before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    /// Offset the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<ProductOrderBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,

    /// Tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<u64>,

    /// Shipping class id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<u64>,

    /// Attribute slug; use together with `attribute_term`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Attribute term id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_term: Option<u64>,

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
    use crate::clients::encode_query;
    use serde_json::json;

    #[test]
    fn test_product_create_body_omits_unset_and_read_only_fields() {
        let product = Product {
            name: Some("Premium Quality".to_string()),
            product_type: Some(ProductType::Simple),
            regular_price: Some("21.99".to_string()),
            price: Some("19.99".to_string()),
            categories: Some(vec![TermRef::id(9), TermRef::id(14)]),
            images: Some(vec![ProductImage {
                src: Some("https://example.com/t_2_front.jpg".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({
                "name": "Premium Quality",
                "type": "simple",
                "regular_price": "21.99",
                "categories": [{"id": 9}, {"id": 14}],
                "images": [{"src": "https://example.com/t_2_front.jpg"}]
            })
        );
    }

    #[test]
    fn test_zero_values_are_sent() {
        let product = Product {
            stock_quantity: Some(0),
            featured: Some(false),
            sale_price: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"stock_quantity": 0, "featured": false, "sale_price": ""})
        );
    }

    #[test]
    fn test_product_deserializes_from_api_response() {
        let product: Product = serde_json::from_value(json!({
            "id": 794,
            "name": "Premium Quality",
            "slug": "premium-quality-19",
            "permalink": "https://example.com/product/premium-quality-19/",
            "date_created": "2017-03-23T17:01:14",
            "date_created_gmt": "2017-03-23T20:01:14",
            "type": "simple",
            "status": "publish",
            "catalog_visibility": "visible",
            "price": "21.99",
            "regular_price": "21.99",
            "sale_price": "",
            "date_on_sale_from": null,
            "virtual": false,
            "stock_quantity": null,
            "stock_status": "instock",
            "backorders": "no",
            "dimensions": {"length": "", "width": "", "height": ""},
            "related_ids": [53, 40],
            "categories": [{"id": 9, "name": "Clothing", "slug": "clothing"}],
            "attributes": [],
            "meta_data": [],
            "_links": {"self": [{"href": "https://example.com/wp-json/wc/v3/products/794"}]}
        }))
        .unwrap();

        assert_eq!(product.id(), Some(794));
        assert_eq!(product.product_type, Some(ProductType::Simple));
        assert_eq!(product.stock_status, Some(StockStatus::InStock));
        assert_eq!(product.is_virtual, Some(false));
        assert_eq!(product.date_on_sale_from, None);
        assert_eq!(
            product.date_created.unwrap().to_string(),
            "2017-03-23 17:01:14"
        );
        assert_eq!(product.categories.unwrap()[0].name.as_deref(), Some("Clothing"));
        assert_eq!(product.links.unwrap().self_.len(), 1);
    }

    #[test]
    fn test_product_list_params_encoding() {
        assert_eq!(encode_query(&ProductListParams::default()).unwrap(), "");

        let params = ProductListParams {
            per_page: Some(50),
            include: Some(vec![1, 2, 3]),
            stock_status: Some(StockStatus::OutOfStock),
            product_type: Some(ProductType::Variable),
            min_price: Some("5".to_string()),
            ..Default::default()
        };

        assert_eq!(
            encode_query(&params).unwrap(),
            "include=1%2C2%2C3&min_price=5&per_page=50&stock_status=outofstock&type=variable"
        );
    }

    #[test]
    fn test_product_collection() {
        assert_eq!(Product::collection_path(None), "products");
        assert_eq!(Product::PARENT_ID, None);
    }
}
