//! Product tag resource implementation.

use serde::{Deserialize, Serialize};

use super::category::TermOrderBy;
use super::common::{Context, ForceDeleteParams, Links, SortOrder};
use crate::rest::Resource;

/// A product tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub count: Option<u64>,

    #[serde(rename = "_links", skip_serializing)]
    pub links: Option<Links>,
}

impl Resource for Tag {
    type GetParams = TagGetParams;
    type ListParams = TagListParams;
    type DeleteParams = ForceDeleteParams;

    const NAME: &'static str = "Tag";
    const COLLECTION: &'static str = "products/tags";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for fetching a single tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TagGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Parameters for listing tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TagListParams {
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<TermOrderBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,

    /// Limit to tags assigned to this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_count_is_read_only() {
        let tag: Tag = serde_json::from_value(json!({
            "id": 34,
            "name": "Leather Shoes",
            "slug": "leather-shoes",
            "description": "",
            "count": 0
        }))
        .unwrap();

        assert_eq!(tag.count, Some(0));
        let body = serde_json::to_value(&tag).unwrap();
        assert!(body.get("count").is_none());
        assert_eq!(body["id"], 34);
    }
}
