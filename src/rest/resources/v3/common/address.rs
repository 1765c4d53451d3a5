//! Billing and shipping addresses for orders and customers.

use serde::{Deserialize, Serialize};

/// A billing address.
///
/// Unlike [`Shipping`], billing addresses carry the contact email and phone.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::common::Billing;
///
/// let billing = Billing {
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     address_1: Some("969 Market".to_string()),
///     city: Some("San Francisco".to_string()),
///     state: Some("CA".to_string()),
///     postcode: Some("94103".to_string()),
///     country: Some("US".to_string()),
///     email: Some("john.doe@example.com".to_string()),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&billing).unwrap();
/// assert_eq!(json["address_1"], "969 Market");
/// assert!(json.get("company").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Billing {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Address line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    /// Address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO code or name of the state, province or district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shipping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Phone number, on stores that collect it for shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
