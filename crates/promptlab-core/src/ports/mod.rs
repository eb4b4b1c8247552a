//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They use only domain types; no reqwest or filesystem details leak into
//! any signature.

pub mod completion;
pub mod model_catalog;
pub mod record_store;

pub use completion::CompletionPort;
pub use model_catalog::{CatalogError, ModelCatalogPort};
pub use record_store::{Record, RecordStore, StoreBackend, StoreError, Stores};
