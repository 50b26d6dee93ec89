//! Vapi API client configuration.

use std::fmt;

use crate::ClientError;

pub(crate) const VAPI_API_URL: &str = "https://api.vapi.ai";

/// Vapi API client configuration.
#[derive(Clone)]
pub struct VapiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for VapiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VapiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl VapiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: VAPI_API_URL.to_string(),
        }
    }

    /// Create config from environment.
    ///
    /// `VAPI_API_KEY` is required; `VAPI_BASE_URL` overrides the default
    /// endpoint (useful for proxies and test servers).
    pub fn from_env() -> Result<Self, ClientError> {
        let key = std::env::var("VAPI_API_KEY")
            .map_err(|_| ClientError::Auth("Vapi not configured. Set VAPI_API_KEY.".into()))?;

        let mut config = Self::new(key);
        if let Ok(base) = std::env::var("VAPI_BASE_URL") {
            config.base_url = base;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = VapiConfig::new("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn default_base_url_and_override() {
        let config = VapiConfig::new("key");
        assert_eq!(config.base_url, "https://api.vapi.ai");

        let config = VapiConfig::new("key").with_base_url("http://localhost:9090");
        assert_eq!(config.base_url, "http://localhost:9090");
    }
}
