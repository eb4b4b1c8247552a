//! Result store port definition.
//!
//! One generic port serves both record families. Backends (local JSON file,
//! remote table) implement it once for any [`Record`], and the composition
//! root picks a backend at startup.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{Evaluation, SavedTest};

/// Errors that can occur in result store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Local filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// Stored or received data could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote store rejected the request.
    #[error("Remote store returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// The remote store could not be reached.
    #[error("Remote store unreachable: {0}")]
    Transport(String),
}

/// A persisted record family.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name: the file stem for the file backend and the table
    /// name for the remote backend.
    const COLLECTION: &'static str;

    /// Caller-assigned unique identifier.
    fn id(&self) -> &str;
}

impl Record for SavedTest {
    const COLLECTION: &'static str = "tests";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Evaluation {
    const COLLECTION: &'static str = "evaluations";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Port for persisting one record family.
///
/// `list_all` is most-recent-first regardless of backend. `upsert` fully
/// replaces an existing record with the same id (keeping its position) or
/// inserts the new record at the front. `delete` of an unknown id is a no-op.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// List every record, most recent first.
    async fn list_all(&self) -> Result<Vec<R>, StoreError>;

    /// Insert or replace by id.
    async fn upsert(&self, record: R) -> Result<(), StoreError>;

    /// Remove the record with `id`, if present.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Look up a single record by id.
    async fn get(&self, id: &str) -> Result<Option<R>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|record| record.id() == id))
    }
}

/// Which backend the stores were built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Remote,
}

/// Container for both record stores.
///
/// Lives in core so adapters can hold stores without depending on a
/// concrete backend crate.
#[derive(Clone)]
pub struct Stores {
    pub tests: Arc<dyn RecordStore<SavedTest>>,
    pub evaluations: Arc<dyn RecordStore<Evaluation>>,
    pub backend: StoreBackend,
}

impl Stores {
    pub fn new(
        tests: Arc<dyn RecordStore<SavedTest>>,
        evaluations: Arc<dyn RecordStore<Evaluation>>,
        backend: StoreBackend,
    ) -> Self {
        Self {
            tests,
            evaluations,
            backend,
        }
    }

    /// True when records go to the remote table store.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.backend == StoreBackend::Remote
    }
}
