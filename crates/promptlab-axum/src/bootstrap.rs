//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use promptlab_core::{
    CompletionPort, DEFAULT_MAX_OUTPUT_TOKENS, FanOutExecutor, ModelCatalogPort, Stores,
};
use promptlab_openrouter::{OpenRouterClient, OpenRouterConfig};
use promptlab_store::{StoreConfig, StoreFactory, TemplateCatalog};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default directory holding prompt template YAML files.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// Directory of prompt template YAML files.
    pub templates_dir: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Completion provider settings, including the credential.
    pub openrouter: OpenRouterConfig,
    /// Result store backend.
    pub store: StoreConfig,
    /// Completion budget used when a request doesn't set one.
    pub max_output_tokens: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            cors: CorsConfig::default(),
            openrouter: OpenRouterConfig::default(),
            store: StoreConfig::default(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl ServerConfig {
    /// Set the bind address.
    #[must_use]
    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set the templates directory.
    #[must_use]
    pub fn with_templates_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_dir = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Set the completion provider configuration.
    #[must_use]
    pub fn with_openrouter(mut self, openrouter: OpenRouterConfig) -> Self {
        self.openrouter = openrouter;
        self
    }

    /// Set the result store backend.
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds every service the handlers need, behind ports so tests can
/// substitute fakes.
pub struct AxumContext {
    /// Sequential fan-out over the completion provider.
    pub executor: FanOutExecutor,
    /// Upstream model listing.
    pub catalog: Arc<dyn ModelCatalogPort>,
    /// Saved test and evaluation stores.
    pub stores: Stores,
    /// Prompt templates on disk.
    pub templates: TemplateCatalog,
}

impl AxumContext {
    pub fn new(
        executor: FanOutExecutor,
        catalog: Arc<dyn ModelCatalogPort>,
        stores: Stores,
        templates: TemplateCatalog,
    ) -> Self {
        Self {
            executor,
            catalog,
            stores,
            templates,
        }
    }
}

/// Build the context from configuration.
///
/// A missing API key is not fatal: the server still starts, reports
/// `api_key_configured: false` and rejects runs with a configuration error.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let client = Arc::new(
        OpenRouterClient::new(&config.openrouter).context("Failed to build OpenRouter client")?,
    );
    if !client.is_configured() {
        warn!("OPENROUTER_API_KEY not set; run requests will be rejected");
    }

    let stores =
        StoreFactory::build_stores(&config.store).context("Failed to initialize result store")?;
    let templates = TemplateCatalog::new(&config.templates_dir);

    info!(
        store = ?stores.backend,
        templates_dir = %templates.dir().display(),
        max_output_tokens = config.max_output_tokens,
        "Axum bootstrap complete"
    );

    let completion: Arc<dyn CompletionPort> = client.clone();
    let executor =
        FanOutExecutor::new(completion).with_max_output_tokens(config.max_output_tokens);

    Ok(AxumContext::new(executor, client, stores, templates))
}

/// Start the web server.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    if config.static_dir.is_some() {
        info!("promptlab web server (with UI) listening on http://{}", addr);
    } else {
        info!("promptlab web server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
