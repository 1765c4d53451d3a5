//! Product category resource implementation.
//!
//! Categories live under `products/categories` and form a tree through
//! `parent`.

use serde::{Deserialize, Serialize};

use super::common::{Context, ForceDeleteParams, Links, SortOrder};
use crate::rest::Resource;

/// How a category archive page is displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDisplay {
    #[default]
    Default,
    Products,
    Subcategories,
    Both,
}

/// A category image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A product category.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Category;
///
/// let category = Category {
///     name: Some("Clothing".to_string()),
///     parent: Some(0),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&category).unwrap();
/// assert_eq!(json["parent"], 0);
/// assert!(json.get("count").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Parent category id; 0 for a top-level category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<CategoryDisplay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CategoryImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,

    /// Number of published products in the category.
    #[serde(skip_serializing)]
    pub count: Option<u64>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Category {
    type GetParams = CategoryGetParams;
    type ListParams = CategoryListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Category";
    const COLLECTION: &'static str = "products/categories";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Fields categories can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TermOrderBy {
    Id,
    Include,
    #[default]
    Name,
    Slug,
    TermGroup,
    Description,
    Count,
}

/// Parameters for listing categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryListParams {
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
    pub order: Option<SortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<TermOrderBy>,

    /// Hide categories with no products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,

    /// Limit to children of this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    /// Limit to categories assigned to this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
