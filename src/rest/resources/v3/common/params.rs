//! Query parameters shared across collections.

use serde::{Deserialize, Serialize};

/// The scope of the returned fields.
///
/// `Edit` includes fields only users with edit rights may see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Fields for display.
    #[default]
    View,
    /// All fields, including those only editors may see.
    Edit,
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Query parameters that only select the response context.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContextParams {
    /// Scope under which the request is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

/// Query parameters for deleting a record.
///
/// Without `force`, resources that support trashing are moved to the trash;
/// resources that do not support it reject the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ForceDeleteParams {
    /// Delete permanently instead of trashing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl ForceDeleteParams {
    /// Parameters for a permanent delete.
    #[must_use]
    pub const fn force() -> Self {
        Self { force: Some(true) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encode_query;

    #[test]
    fn test_default_params_encode_to_empty_query() {
        assert_eq!(encode_query(&ContextParams::default()).unwrap(), "");
        assert_eq!(encode_query(&ForceDeleteParams::default()).unwrap(), "");
    }

    #[test]
    fn test_force_delete_encodes_flag() {
        assert_eq!(encode_query(&ForceDeleteParams::force()).unwrap(), "force=true");
    }

    #[test]
    fn test_context_encodes_lowercase() {
        let params = ContextParams {
            context: Some(Context::Edit),
        };
        assert_eq!(encode_query(&params).unwrap(), "context=edit");
    }
}
