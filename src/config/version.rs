//! WooCommerce REST API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API version.
///
/// Each version is served under its own namespace, `wp-json/wc/{version}`.
/// `v3` has been the current namespace since WooCommerce 3.5; `v1` and `v2`
/// remain available on most installs for older integrations.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3);
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
///
/// assert_eq!(format!("{}", ApiVersion::V3), "v3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ApiVersion {
    /// Legacy `wc/v1` namespace (WooCommerce 2.6).
    V1,
    /// `wc/v2` namespace (WooCommerce 3.0).
    V2,
    /// `wc/v3` namespace (WooCommerce 3.5 and later).
    #[default]
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns the namespace segment used in request paths.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches("wc/").to_ascii_lowercase();
        match normalized.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v3() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V3);
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_parses_plain_and_namespaced_versions() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("wc/v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let result = "v4".parse::<ApiVersion>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { ref version }) if version == "v4"
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for version in [ApiVersion::V1, ApiVersion::V2, ApiVersion::V3] {
            let parsed: ApiVersion = version.to_string().parse().unwrap();
            assert_eq!(parsed, version);
        }
    }

    #[test]
    fn test_versions_are_ordered() {
        assert!(ApiVersion::V1 < ApiVersion::V2);
        assert!(ApiVersion::V2 < ApiVersion::V3);
    }
}
