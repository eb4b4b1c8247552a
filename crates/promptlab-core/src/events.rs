//! Progress events for a streamed run.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag. A run over N models produces
//! exactly `2N + 1` events:
//!
//! ```json
//! { "type": "status", "current": 1, "total": 2, "model": "m/a", "message": "Processing m/a..." }
//! { "type": "result", "model": "m/a", "success": true, "content": "Hi!", "input_tokens": 3, "output_tokens": 2 }
//! { "type": "status", "current": 2, "total": 2, "model": "m/b", "message": "Processing m/b..." }
//! { "type": "result", "model": "m/b", "success": false, "error": "HTTP 429: ..." }
//! { "type": "done" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::ModelOutcome;

/// One event in a streamed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEvent {
    /// About to dispatch to a model.
    Status {
        /// 1-based position of the model.
        current: usize,
        total: usize,
        model: String,
        message: String,
    },

    /// The outcome for the model announced by the preceding status event.
    Result(ModelOutcome),

    /// Terminal event; nothing follows it.
    Done,
}

impl RunEvent {
    /// Status event for the model at 0-based `index` of `total`.
    pub fn status(index: usize, total: usize, model: &str) -> Self {
        Self::Status {
            current: index + 1,
            total,
            model: model.to_string(),
            message: format!("Processing {model}..."),
        }
    }

    /// Stable discriminant, matching the serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::Result(_) => "result",
            Self::Done => "done",
        }
    }
}
