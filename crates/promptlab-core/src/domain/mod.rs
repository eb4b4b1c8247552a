//! Domain types.
//!
//! These types carry no infrastructure concerns; adapters serialize them
//! as-is on the wire and in storage.

pub mod catalog;
pub mod outcome;
pub mod records;

pub use catalog::{ModelListing, PromptTemplate};
pub use outcome::{DEFAULT_MAX_OUTPUT_TOKENS, ModelOutcome, Outcome, RunRequest};
pub use records::{Evaluation, SavedTest};
