//! Record store response envelopes.

use promptlab_core::{Evaluation, SavedTest};
use serde::Serialize;

/// Response for `GET /api/tests`.
#[derive(Debug, Clone, Serialize)]
pub struct TestsResponse {
    pub tests: Vec<SavedTest>,
}

/// Response for `GET /api/evaluations`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationsResponse {
    pub evaluations: Vec<Evaluation>,
}

/// Acknowledgement for writes and deletes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
