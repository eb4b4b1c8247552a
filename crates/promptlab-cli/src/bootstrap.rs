//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Global flags (with env and `.env` fallbacks) become
//! explicit config structs here; nothing downstream reads the environment.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use promptlab_core::FanOutExecutor;
use promptlab_openrouter::{OpenRouterClient, OpenRouterConfig};
use promptlab_store::StoreConfig;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    /// Completion provider settings.
    pub openrouter: OpenRouterConfig,
    /// Remote store URL, if any.
    pub supabase_url: Option<String>,
    /// Remote store key, if any.
    pub supabase_key: Option<String>,
}

impl CliConfig {
    /// Collect configuration from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            openrouter: OpenRouterConfig::new()
                .with_base_url(cli.base_url.clone())
                .with_optional_api_key(cli.api_key.clone()),
            supabase_url: cli.supabase_url.clone(),
            supabase_key: cli.supabase_key.clone(),
        }
    }

    /// Store backend: remote when both Supabase values are set, otherwise
    /// JSON files under `data_dir`.
    pub fn store_config(&self, data_dir: &Path) -> StoreConfig {
        StoreConfig::resolve(
            data_dir,
            self.supabase_url.as_deref(),
            self.supabase_key.as_deref(),
        )
    }
}

/// Composed context for one-shot commands.
pub struct CliContext {
    /// Sequential fan-out over the OpenRouter client.
    pub executor: FanOutExecutor,
}

/// Build the CLI context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client =
        OpenRouterClient::new(&config.openrouter).context("Failed to build OpenRouter client")?;
    Ok(CliContext {
        executor: FanOutExecutor::new(Arc::new(client)),
    })
}
