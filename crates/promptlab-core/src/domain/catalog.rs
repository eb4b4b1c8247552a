//! Read-only catalog entries: upstream models and prompt templates.

use serde::{Deserialize, Serialize};

/// A model offered by the completion provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelListing {
    pub id: String,
    #[serde(default)]
    pub context_length: u64,
    /// Provider pricing object, passed through untouched.
    #[serde(default = "empty_object")]
    pub pricing: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// A named prompt template loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: String,
}
