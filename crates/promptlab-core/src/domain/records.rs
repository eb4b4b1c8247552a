//! Persisted record types: saved test runs and human evaluations.

use serde::{Deserialize, Deserializer, Serialize};

use super::outcome::ModelOutcome;

/// A saved prompt run, kept for later review.
///
/// `results` holds the outcome maps exactly as the client sent them, so any
/// extra fields a client attaches (ratings, comments) survive a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTest {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub models: Vec<String>,
    pub results: Vec<serde_json::Value>,
    pub created_at: String,
}

impl SavedTest {
    /// Parse the stored result maps that are valid model outcomes.
    ///
    /// Maps that don't describe an outcome are skipped.
    pub fn outcomes(&self) -> Vec<ModelOutcome> {
        self.results
            .iter()
            .filter_map(|value| serde_json::from_value(value.clone()).ok())
            .collect()
    }
}

/// A 1-5 human rating of one model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    /// Id of the saved test this rating belongs to. Not checked for existence.
    pub test_id: String,
    pub test_name: String,
    pub prompt: String,
    pub model: String,
    pub response: String,
    pub rating: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_tokens: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_tokens: u64,
    pub created_at: String,
}

impl Evaluation {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// Check that the rating is on the 1-5 scale.
    pub fn validate(&self) -> Result<(), String> {
        if (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating) {
            Ok(())
        } else {
            Err(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN_RATING,
                Self::MAX_RATING,
                self.rating
            ))
        }
    }
}

/// Read `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
