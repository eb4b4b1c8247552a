//! Internal error types for OpenRouter calls.
//!
//! These errors never leave the crate as-is: completion failures are
//! folded into failed outcomes and catalog failures are mapped to the core
//! `CatalogError`.

use promptlab_core::CatalogError;
use thiserror::Error;

/// Longest slice of an upstream error body kept in a message.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Result type alias for OpenRouter operations.
pub type OpenRouterResult<T> = Result<T, OpenRouterError>;

#[derive(Debug, Error)]
pub enum OpenRouterError {
    /// Non-success HTTP status. `body` is already truncated.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Network, timeout, or client construction failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Body wasn't the JSON we expected.
    #[error("Invalid response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Well-formed body without a completion text.
    #[error("Invalid response: no completion content in response")]
    MissingContent,
}

impl OpenRouterError {
    /// Build a status error, truncating the raw body.
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_chars(body, MAX_ERROR_BODY_CHARS),
        }
    }
}

impl From<OpenRouterError> for CatalogError {
    fn from(err: OpenRouterError) -> Self {
        match err {
            OpenRouterError::Status { status, .. } => Self::Status { status },
            OpenRouterError::Network(e) => Self::Transport(e.to_string()),
            OpenRouterError::InvalidUrl(e) => Self::Transport(e.to_string()),
            OpenRouterError::JsonParse(e) => Self::InvalidResponse(e.to_string()),
            OpenRouterError::MissingContent => {
                Self::InvalidResponse("missing model list".to_string())
            }
        }
    }
}

/// Keep at most `max` characters, respecting char boundaries.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
