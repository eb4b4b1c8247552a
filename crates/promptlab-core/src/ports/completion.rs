//! Completion provider port.

use async_trait::async_trait;

use crate::domain::ModelOutcome;

/// Port for a single prompt completion against one upstream model.
///
/// Implementations fail closed: every transport, status, or decoding
/// failure is folded into a failed [`ModelOutcome`], so `invoke` has no
/// error channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Whether a non-empty credential is available.
    ///
    /// Callers must check this before invoking; an unconfigured port would
    /// fail every call the same way.
    fn is_configured(&self) -> bool;

    /// Send `prompt` as a single user turn to `model`.
    async fn invoke(&self, model: &str, prompt: &str, max_output_tokens: u32) -> ModelOutcome;
}
