//! Local JSON file implementation of [`RecordStore`].

use std::io::{self, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use promptlab_core::{Record, RecordStore, StoreError};
use tempfile::Builder;
use tokio::fs;
use tracing::debug;

use crate::error::{io_error, json_error};

/// Stores one record family as a pretty-printed JSON array in
/// `<data_dir>/<collection>.json`.
///
/// Every mutation rewrites the whole file through its own temp file in the
/// same directory followed by a rename, so readers never see a half-written
/// array. There is no lock: concurrent writers each replace the file with
/// the list they loaded, and the last rename wins.
pub struct JsonFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileStore<R> {
    /// Create a store rooted at `data_dir`. Nothing touches the disk until
    /// the first operation.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", R::COLLECTION)),
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<R>, StoreError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(e)),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(json_error)
    }

    async fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).await.map_err(io_error)?;

        let json = serde_json::to_string_pretty(records).map_err(json_error)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || replace_file(&dir, &path, json.as_bytes()))
            .await
            .map_err(|e| io_error(io::Error::other(e)))?
            .map_err(io_error)?;

        debug!(path = %self.path.display(), count = records.len(), "Wrote record file");
        Ok(())
    }
}

/// Write `contents` to a uniquely named temp file in `dir`, then rename it
/// over `path`.
fn replace_file(dir: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut temp = Builder::new()
        .prefix(".promptlab-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl<R: Record> RecordStore<R> for JsonFileStore<R> {
    async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        self.load().await
    }

    async fn upsert(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.load().await?;

        match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => records[index] = record,
            None => records.insert(0, record),
        }

        self.save(&records).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            debug!(collection = R::COLLECTION, id = %id, "Delete of unknown id");
        }
        self.save(&records).await
    }
}
