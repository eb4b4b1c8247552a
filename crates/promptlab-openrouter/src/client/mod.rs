//! OpenRouter client.
//!
//! One client serves both ports: [`CompletionPort`] for single-model
//! completions and [`ModelCatalogPort`] for model discovery.
//!
//! [`CompletionPort`]: promptlab_core::CompletionPort
//! [`ModelCatalogPort`]: promptlab_core::ModelCatalogPort

mod catalog;
mod completion;

use std::time::Duration;

use url::Url;

use crate::config::OpenRouterConfig;
use crate::error::OpenRouterResult;

/// Client for the OpenRouter chat completions API.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    catalog_timeout: Duration,
    catalog_limit: usize,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    /// Create a new client with the given configuration.
    ///
    /// A missing API key is not an error here; callers check
    /// `is_configured()` before dispatching.
    pub fn new(config: &OpenRouterConfig) -> OpenRouterResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url)?,
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            catalog_timeout: config.catalog_timeout,
            catalog_limit: config.catalog_limit,
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    /// Resolve an endpoint path against the API root.
    fn endpoint(&self, path: &str) -> OpenRouterResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Attach credential and attribution headers.
    fn decorate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title);
        match self.api_key {
            Some(ref key) => request.bearer_auth(key),
            None => request,
        }
    }
}

/// Parse the base URL and make sure it ends with `/` so relative joins
/// append instead of replacing the last segment.
fn normalize_base_url(raw: &str) -> OpenRouterResult<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
