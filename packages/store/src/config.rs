//! # Console configuration
//!
//! [`AdminConfig`] is built once at startup and injected into the API client and
//! the auth gate. It can be parsed from an `admin.toml`-style document:
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com/api/"
//! page_size = 10
//!
//! [auth]
//! identifier = "admin@nellisauto.com"
//! secret = "password123"
//! ```
//!
//! Every section is optional; a missing or empty document equals
//! [`AdminConfig::default`]. [`AdminConfig::from_env`] takes the API base URL
//! from the `NELLIS_API_URL` variable captured at build time.

use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::Credentials;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API. Resource paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Rows requested per page from paginated list endpoints.
    /// Never zero; a configured `0` reads as `1`.
    #[serde(default = "default_page_size", deserialize_with = "page_size_at_least_one")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    10
}

fn page_size_at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_identifier")]
    pub identifier: String,
    #[serde(default = "default_secret")]
    pub secret: String,
}

fn default_identifier() -> String {
    "admin@nellisauto.com".to_string()
}

fn default_secret() -> String {
    "password123".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            secret: default_secret(),
        }
    }
}

impl AdminConfig {
    /// Default config with the base URL captured from `NELLIS_API_URL` at
    /// build time, when it was set.
    pub fn from_env() -> Self {
        match option_env!("NELLIS_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to set the page size. Zero is bumped to one.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.api.page_size = size.max(1);
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.auth.identifier.clone(), self.auth.secret.clone())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_default() {
        let config = AdminConfig::from_toml("").unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.api.page_size, 10);
        assert_eq!(config.auth.identifier, "admin@nellisauto.com");
    }

    #[test]
    fn test_partial_document() {
        let config = AdminConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.nellisauto.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.nellisauto.com/");
        assert_eq!(config.api.page_size, 10);
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AdminConfig::default()
            .with_base_url("https://example.test/api/")
            .with_page_size(25);
        let text = config.to_toml().unwrap();
        assert_eq!(AdminConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_page_size_never_zero() {
        assert_eq!(AdminConfig::default().with_page_size(0).api.page_size, 1);
    }

    #[test]
    fn test_zero_page_size_in_document_reads_as_one() {
        let config = AdminConfig::from_toml("[api]\npage_size = 0").unwrap();
        assert_eq!(config.api.page_size, 1);
        let config = AdminConfig::from_toml("[api]\npage_size = 25").unwrap();
        assert_eq!(config.api.page_size, 25);
    }

    #[test]
    fn test_credentials_from_config() {
        let creds = AdminConfig::default().credentials();
        assert_eq!(creds, Credentials::new("admin@nellisauto.com", "password123"));
    }
}
