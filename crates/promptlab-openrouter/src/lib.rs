//! # promptlab-openrouter
//!
//! OpenRouter adapter for the promptlab completion and model catalog ports.
//!
//! The client fails closed: completion errors of any kind (HTTP status,
//! network, malformed body) come back as failed outcomes, never as `Err`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;

// ============================================================================
// Public API
// ============================================================================

pub use client::OpenRouterClient;
pub use config::{DEFAULT_BASE_URL, OpenRouterConfig};
pub use error::{MAX_ERROR_BODY_CHARS, OpenRouterError, OpenRouterResult};

// Silence unused dev-dependency warnings; used by tests/
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use wiremock as _;
