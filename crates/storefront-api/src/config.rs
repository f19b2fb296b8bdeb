//! Storefront API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, the same way the rest of the deployment is configured.

use std::env;

use serde::{Deserialize, Serialize};
use url::Url;

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is resolved against.
    /// Always ends with a trailing slash so `Url::join` keeps the full path.
    pub base_url: Url,

    /// Multi-store tenant identifier, sent as `x-tenant-id` on every request
    pub tenant_id: String,

    /// Locale used when a request context carries none
    pub default_locale: String,
}

impl ApiConfig {
    /// Builds a configuration from explicit values.
    pub fn new(
        base_url: &str,
        tenant_id: impl Into<String>,
        default_locale: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        // A missing trailing slash would make Url::join drop the last path
        // segment of the base
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_API_URL".to_string()))?;

        Ok(ApiConfig {
            base_url,
            tenant_id: tenant_id.into(),
            default_locale: default_locale.into(),
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| "http://localhost:8080/".to_string());

        let tenant_id = env::var("STOREFRONT_TENANT_ID").unwrap_or_default();

        let default_locale =
            env::var("STOREFRONT_DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        ApiConfig::new(&base_url, tenant_id, default_locale)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_appended() {
        let config = ApiConfig::new("http://api.example.com/v1", "t1", "en").unwrap();
        assert_eq!(config.base_url.as_str(), "http://api.example.com/v1/");

        let joined = config.base_url.join("cart").unwrap();
        assert_eq!(joined.as_str(), "http://api.example.com/v1/cart");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(ApiConfig::new("not a url", "t1", "en").is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ApiConfig::new("http://api.example.com/v1", "t1", "ar").unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["base_url"], "http://api.example.com/v1/");

        let back: ApiConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.tenant_id, "t1");
        assert_eq!(back.default_locale, "ar");
    }
}
