//! # promptlab-core
//!
//! Domain types, port traits and services for running one prompt across
//! many models.
//!
//! - [`domain`] - run requests, per-model outcomes, persisted records
//! - [`ports`] - traits implemented by adapter crates (completion provider,
//!   model catalog, record stores)
//! - [`services`] - the sequential fan-out executor and its progress stream
//! - [`events`] - the streamed progress protocol
//! - [`report`] - Markdown rendering of a finished run
//!
//! This crate performs no I/O of its own.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_MAX_OUTPUT_TOKENS, Evaluation, ModelListing, ModelOutcome, Outcome, PromptTemplate,
    RunRequest, SavedTest,
};
pub use events::RunEvent;
pub use ports::{
    CatalogError, CompletionPort, ModelCatalogPort, Record, RecordStore, StoreBackend, StoreError,
    Stores,
};
pub use report::render_markdown;
pub use services::{FanOutExecutor, MISSING_API_KEY, RunError, progress_events};
