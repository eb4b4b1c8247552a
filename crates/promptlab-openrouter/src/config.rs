//! Public configuration for the OpenRouter client.

use std::time::Duration;

/// Default OpenRouter API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Configuration for the OpenRouter client.
///
/// # Example
///
/// ```
/// use promptlab_openrouter::OpenRouterConfig;
/// use std::time::Duration;
///
/// let config = OpenRouterConfig::new()
///     .with_api_key("sk-or-...")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API root; endpoint paths are joined onto it
    pub(crate) base_url: String,
    /// Bearer credential. `None` or empty means unconfigured.
    pub(crate) api_key: Option<String>,
    /// Per-completion timeout
    pub(crate) timeout: Duration,
    /// Timeout for the model listing call
    pub(crate) catalog_timeout: Duration,
    /// Maximum number of models returned by the catalog
    pub(crate) catalog_limit: usize,
    /// Sent as `HTTP-Referer` for provider-side attribution
    pub(crate) referer: String,
    /// Sent as `X-Title` for provider-side attribution
    pub(crate) title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(120),
            catalog_timeout: Duration::from_secs(30),
            catalog_limit: 50,
            referer: "https://promptlab.local".to_string(),
            title: "promptlab".to_string(),
        }
    }
}

impl OpenRouterConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `https://openrouter.ai/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the per-completion timeout.
    ///
    /// Defaults to 120 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the model listing timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout = timeout;
        self
    }

    /// Set the attribution headers sent with every request.
    #[must_use]
    pub fn with_attribution(
        mut self,
        referer: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.referer = referer.into();
        self.title = title.into();
        self
    }

    /// Whether a usable credential is present.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenRouterConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.catalog_limit, 50);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_builder_pattern() {
        let config = OpenRouterConfig::new()
            .with_base_url("http://localhost:9999/v1")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5))
            .with_attribution("https://example.test", "bench");

        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.api_key, Some("secret".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.title, "bench");
        assert!(config.has_api_key());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        assert!(!OpenRouterConfig::new().with_api_key("  ").has_api_key());
        assert!(!OpenRouterConfig::new().with_optional_api_key(None).has_api_key());
    }
}
