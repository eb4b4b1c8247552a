//! Wire types for the OpenAI-compatible chat completions and model list
//! endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 1],
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// A single user turn.
    pub const fn user_turn(model: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
}

impl ChatResponse {
    /// First choice's text plus (prompt, completion) token counts.
    pub fn into_parts(self) -> Option<(String, u64, u64)> {
        let content = self.choices.into_iter().next()?.message.content?;
        let usage = self.usage.unwrap_or_default();
        Some((
            content,
            usage.prompt_tokens.unwrap_or(0),
            usage.completion_tokens.unwrap_or(0),
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelsResponse {
    #[serde(default)]
    pub data: Vec<RawModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawModel {
    pub id: String,
    #[serde(default)]
    pub context_length: Option<u64>,
    #[serde(default)]
    pub pricing: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(ChatRequest::user_turn("m/a", "Say hi", 4096)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "m/a",
                "messages": [{"role": "user", "content": "Say hi"}],
                "max_tokens": 4096
            })
        );
    }

    #[test]
    fn test_usage_defaults_to_zero() {
        let response: ChatResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": "hey"}}]})).unwrap();
        assert_eq!(response.into_parts(), Some(("hey".to_string(), 0, 0)));
    }

    #[test]
    fn test_null_content_has_no_parts() {
        let response: ChatResponse = serde_json::from_value(
            json!({"choices": [{"message": {"content": null}}], "usage": null}),
        )
        .unwrap();
        assert!(response.into_parts().is_none());
    }

    #[test]
    fn test_empty_choices_has_no_parts() {
        let response: ChatResponse = serde_json::from_value(json!({"id": "gen-1"})).unwrap();
        assert!(response.into_parts().is_none());
    }
}
