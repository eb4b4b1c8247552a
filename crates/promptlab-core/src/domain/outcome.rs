//! Run request and per-model outcome types.
//!
//! A [`ModelOutcome`] carries an explicit discriminant ([`Outcome`]) in
//! memory, but serializes to the flat wire shape clients expect:
//!
//! ```json
//! { "model": "m/a", "success": true, "content": "Hi!", "input_tokens": 3, "output_tokens": 2 }
//! { "model": "m/b", "success": false, "error": "HTTP 429: rate limited" }
//! ```

use serde::{Deserialize, Serialize};

/// Default completion budget sent upstream when a request doesn't set one.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

/// A prompt to fan out across an ordered list of models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub prompt: String,
    /// Model ids in dispatch order. Duplicates are kept.
    pub models: Vec<String>,
    /// Optional per-request override of the completion budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl RunRequest {
    /// Create a request with the default completion budget.
    pub fn new(prompt: impl Into<String>, models: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            models,
            max_tokens: None,
        }
    }

    /// Check the request shape before any upstream work.
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if self.models.is_empty() {
            return Err("at least one model is required".to_string());
        }
        Ok(())
    }
}

/// Result of one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed {
        content: String,
        input_tokens: u64,
        output_tokens: u64,
    },
    Failed {
        error: String,
    },
}

/// The outcome of dispatching a prompt to a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OutcomeWire", into = "OutcomeWire")]
pub struct ModelOutcome {
    pub model: String,
    pub outcome: Outcome,
}

impl ModelOutcome {
    /// Successful completion with token usage.
    pub fn completed(
        model: impl Into<String>,
        content: impl Into<String>,
        input_tokens: u64,
        output_tokens: u64,
    ) -> Self {
        Self {
            model: model.into(),
            outcome: Outcome::Completed {
                content: content.into(),
                input_tokens,
                output_tokens,
            },
        }
    }

    /// Failed completion with a human-readable reason.
    pub fn failed(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            outcome: Outcome::Failed {
                error: error.into(),
            },
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Completed { .. })
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Completed { content, .. } => Some(content),
            Outcome::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Completed { .. } => None,
            Outcome::Failed { error } => Some(error),
        }
    }

    #[must_use]
    pub const fn input_tokens(&self) -> u64 {
        match self.outcome {
            Outcome::Completed { input_tokens, .. } => input_tokens,
            Outcome::Failed { .. } => 0,
        }
    }

    #[must_use]
    pub const fn output_tokens(&self) -> u64 {
        match self.outcome {
            Outcome::Completed { output_tokens, .. } => output_tokens,
            Outcome::Failed { .. } => 0,
        }
    }
}

/// Flat wire representation of [`ModelOutcome`].
#[derive(Debug, Serialize, Deserialize)]
struct OutcomeWire {
    model: String,
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_tokens: Option<u64>,
}

impl From<ModelOutcome> for OutcomeWire {
    fn from(value: ModelOutcome) -> Self {
        match value.outcome {
            Outcome::Completed {
                content,
                input_tokens,
                output_tokens,
            } => Self {
                model: value.model,
                success: true,
                content: Some(content),
                error: None,
                input_tokens: Some(input_tokens),
                output_tokens: Some(output_tokens),
            },
            Outcome::Failed { error } => Self {
                model: value.model,
                success: false,
                content: None,
                error: Some(error),
                input_tokens: None,
                output_tokens: None,
            },
        }
    }
}

impl TryFrom<OutcomeWire> for ModelOutcome {
    type Error = String;

    fn try_from(wire: OutcomeWire) -> Result<Self, Self::Error> {
        let outcome = if wire.success {
            let content = wire
                .content
                .ok_or_else(|| format!("successful outcome for '{}' has no content", wire.model))?;
            Outcome::Completed {
                content,
                input_tokens: wire.input_tokens.unwrap_or(0),
                output_tokens: wire.output_tokens.unwrap_or(0),
            }
        } else {
            let error = wire
                .error
                .ok_or_else(|| format!("failed outcome for '{}' has no error", wire.model))?;
            Outcome::Failed { error }
        };

        Ok(Self {
            model: wire.model,
            outcome,
        })
    }
}
