//! Run and catalog response envelopes.

use promptlab_core::{ModelListing, ModelOutcome, PromptTemplate};
use serde::Serialize;

/// Response for `POST /api/run`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub results: Vec<ModelOutcome>,
}

/// Response for `GET /api/models`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelListing>,
}

/// Response for `GET /api/templates`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<PromptTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_response_shape() {
        let response = RunResponse {
            results: vec![
                ModelOutcome::completed("m/a", "Hi!", 3, 2),
                ModelOutcome::failed("m/b", "HTTP 429: slow down"),
            ],
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "results": [
                    {"model": "m/a", "success": true, "content": "Hi!",
                     "input_tokens": 3, "output_tokens": 2},
                    {"model": "m/b", "success": false, "error": "HTTP 429: slow down"}
                ]
            })
        );
    }
}
