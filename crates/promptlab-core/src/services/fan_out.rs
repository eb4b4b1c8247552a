//! Fan-out executor - dispatches one prompt to many models in order.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{DEFAULT_MAX_OUTPUT_TOKENS, ModelOutcome, RunRequest};
use crate::events::RunEvent;
use crate::ports::CompletionPort;
use crate::services::progress::progress_events;

/// Errors that abort a whole run before any model is invoked.
///
/// Per-model failures never show up here; they are recorded as failed
/// outcomes.
#[derive(Debug, Error)]
pub enum RunError {
    /// A required credential is missing.
    #[error("{0}")]
    Configuration(String),

    /// The request itself is unusable.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Message used when the completion credential is absent.
pub const MISSING_API_KEY: &str = "OPENROUTER_API_KEY not configured";

/// Sequential fan-out over a completion port.
///
/// Calls are made strictly in request order, one at a time. A failed model
/// never affects the models after it, and nothing is cached between runs.
pub struct FanOutExecutor {
    client: Arc<dyn CompletionPort>,
    max_output_tokens: u32,
}

impl FanOutExecutor {
    /// Create an executor with the default completion budget.
    pub fn new(client: Arc<dyn CompletionPort>) -> Self {
        Self {
            client,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Override the default completion budget.
    #[must_use]
    pub const fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Whether the underlying client has a credential.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Run the prompt against every model and collect the outcomes.
    ///
    /// `outcomes[i]` always corresponds to `request.models[i]`.
    pub async fn run(&self, request: &RunRequest) -> Result<Vec<ModelOutcome>, RunError> {
        let max_tokens = self.prepare(request)?;

        info!(models = request.models.len(), "Starting fan-out run");

        let mut outcomes = Vec::with_capacity(request.models.len());
        for model in &request.models {
            let outcome = self.client.invoke(model, &request.prompt, max_tokens).await;
            if let Some(error) = outcome.error() {
                warn!(model = %model, error = %error, "Model invocation failed");
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Stream progress events for the run instead of collecting outcomes.
    ///
    /// Preconditions are checked here, before the stream exists, so callers
    /// can report a configuration error instead of an empty stream.
    pub fn stream(&self, request: RunRequest) -> Result<BoxStream<'static, RunEvent>, RunError> {
        let max_tokens = self.prepare(&request)?;

        info!(models = request.models.len(), "Starting streamed fan-out run");

        Ok(progress_events(Arc::clone(&self.client), request, max_tokens).boxed())
    }

    /// Shared precondition check; returns the effective completion budget.
    fn prepare(&self, request: &RunRequest) -> Result<u32, RunError> {
        if !self.client.is_configured() {
            return Err(RunError::Configuration(MISSING_API_KEY.to_string()));
        }
        request.validate().map_err(RunError::Validation)?;
        Ok(request.max_tokens.unwrap_or(self.max_output_tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion::MockCompletionPort;
    use mockall::predicate::eq;

    fn models(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_outcomes_follow_model_order() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke()
            .times(4)
            .returning(|model, _, _| ModelOutcome::completed(model, "ok", 1, 1));

        let executor = FanOutExecutor::new(Arc::new(mock));
        let ids = models(&["m/c", "m/a", "m/b", "m/a"]);
        let outcomes = executor
            .run(&RunRequest::new("Say hi", ids.clone()))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), ids.len());
        for (outcome, id) in outcomes.iter().zip(&ids) {
            assert_eq!(&outcome.model, id);
        }
    }

    #[tokio::test]
    async fn test_partial_failure_is_isolated() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke()
            .with(eq("m/a"), eq("Say hi"), eq(DEFAULT_MAX_OUTPUT_TOKENS))
            .times(1)
            .returning(|model, _, _| ModelOutcome::completed(model, "Hi!", 3, 2));
        mock.expect_invoke()
            .with(eq("m/b"), eq("Say hi"), eq(DEFAULT_MAX_OUTPUT_TOKENS))
            .times(1)
            .returning(|model, _, _| ModelOutcome::failed(model, "HTTP 429: rate limited"));

        let executor = FanOutExecutor::new(Arc::new(mock));
        let outcomes = executor
            .run(&RunRequest::new("Say hi", models(&["m/a", "m/b"])))
            .await
            .unwrap();

        assert_eq!(outcomes[0], ModelOutcome::completed("m/a", "Hi!", 3, 2));
        assert!(!outcomes[1].is_success());
        assert!(outcomes[1].content().is_none());
        assert!(outcomes[1].error().unwrap().starts_with("HTTP 429"));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_call() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(false);
        mock.expect_invoke().never();

        let executor = FanOutExecutor::new(Arc::new(mock));
        let request = RunRequest::new("Say hi", models(&["m/a"]));

        let err = executor.run(&request).await.unwrap_err();
        assert!(matches!(err, RunError::Configuration(_)));
        assert_eq!(err.to_string(), MISSING_API_KEY);

        assert!(matches!(
            executor.stream(request),
            Err(RunError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_model_list_is_rejected() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke().never();

        let executor = FanOutExecutor::new(Arc::new(mock));
        let err = executor
            .run(&RunRequest::new("Say hi", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::Validation(_)));
    }

    #[tokio::test]
    async fn test_repeated_runs_are_not_cached() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke()
            .times(2)
            .returning(|model, _, _| ModelOutcome::completed(model, "ok", 0, 0));

        let executor = FanOutExecutor::new(Arc::new(mock));
        let request = RunRequest::new("p", models(&["m/a"]));
        executor.run(&request).await.unwrap();
        executor.run(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_request_budget_overrides_default() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke()
            .with(eq("m/a"), eq("p"), eq(256))
            .times(1)
            .returning(|model, _, _| ModelOutcome::completed(model, "short", 1, 1));

        let executor = FanOutExecutor::new(Arc::new(mock)).with_max_output_tokens(1024);
        let mut request = RunRequest::new("p", models(&["m/a"]));
        request.max_tokens = Some(256);
        executor.run(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_stream_yields_two_events_per_model_plus_done() {
        let mut mock = MockCompletionPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_invoke()
            .returning(|model, _, _| ModelOutcome::completed(model, "ok", 0, 0));

        let executor = FanOutExecutor::new(Arc::new(mock));
        let events: Vec<RunEvent> = executor
            .stream(RunRequest::new("p", models(&["m/a", "m/b"])))
            .unwrap()
            .collect()
            .await;

        let kinds: Vec<&str> = events.iter().map(RunEvent::kind).collect();
        assert_eq!(kinds, ["status", "result", "status", "result", "done"]);
    }
}
