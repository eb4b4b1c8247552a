//! `CompletionPort` implementation.

use async_trait::async_trait;
use promptlab_core::{CompletionPort, ModelOutcome};
use tracing::{debug, warn};

use super::OpenRouterClient;
use crate::error::{OpenRouterError, OpenRouterResult};
use crate::models::{ChatRequest, ChatResponse};

impl OpenRouterClient {
    /// One completion round-trip; any failure is returned as an error.
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> OpenRouterResult<ModelOutcome> {
        let url = self.endpoint("chat/completions")?;
        let body = ChatRequest::user_turn(model, prompt, max_output_tokens);

        debug!(model = %model, url = %url, max_output_tokens, "Sending completion request");

        let response = self.decorate(self.http.post(url)).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(OpenRouterError::status(status.as_u16(), &text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let (content, input_tokens, output_tokens) =
            parsed.into_parts().ok_or(OpenRouterError::MissingContent)?;

        Ok(ModelOutcome::completed(
            model,
            content,
            input_tokens,
            output_tokens,
        ))
    }
}

#[async_trait]
impl CompletionPort for OpenRouterClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn invoke(&self, model: &str, prompt: &str, max_output_tokens: u32) -> ModelOutcome {
        match self.complete(model, prompt, max_output_tokens).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(model = %model, error = %e, "Completion failed");
                ModelOutcome::failed(model, e.to_string())
            }
        }
    }
}
