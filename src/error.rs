//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so an
//! invalid shop URL or empty credential is rejected before any client exists.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConfigError, ShopUrl};
//!
//! let result = ShopUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyShopUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop URL cannot be empty.
    #[error("Shop URL cannot be empty. Please provide the base URL of the WordPress site.")]
    EmptyShopUrl,

    /// Shop URL is not an absolute http(s) URL.
    #[error("Invalid shop URL '{url}'. Expected an absolute URL such as 'https://shop.example.com'.")]
    InvalidShopUrl {
        /// The URL that was provided.
        url: String,
    },

    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret.")]
    EmptyConsumerSecret,

    /// API version is not one the REST API exposes.
    #[error("Invalid API version '{version}'. Expected one of 'v1', 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// Reason reported by the HTTP library.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shop_url_error_message() {
        let message = ConfigError::EmptyShopUrl.to_string();
        assert!(message.contains("Shop URL cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_url_error_message() {
        let error = ConfigError::InvalidShopUrl {
            url: "shop.example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("shop.example.com"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "shop_url" };
        let message = error.to_string();
        assert!(message.contains("shop_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyConsumerKey;
        let _: &dyn std::error::Error = &error;
    }
}
