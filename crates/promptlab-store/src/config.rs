//! Store backend selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use promptlab_core::StoreBackend;

/// Directory used by the file backend when none is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Request timeout for the remote table API.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the remote table backend.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteTableConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Service key sent as both `apikey` and bearer token.
    pub api_key: String,
    pub timeout: Duration,
}

impl RemoteTableConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of logs.
impl fmt::Debug for RemoteTableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteTableConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Which backend to build, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// One JSON file per record family under `data_dir`.
    File { data_dir: PathBuf },
    /// PostgREST-style remote tables.
    Remote(RemoteTableConfig),
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DATA_DIR)
    }
}

impl StoreConfig {
    pub fn file(data_dir: impl Into<PathBuf>) -> Self {
        Self::File {
            data_dir: data_dir.into(),
        }
    }

    pub fn remote(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::Remote(RemoteTableConfig::new(base_url, api_key))
    }

    /// Use the remote backend when both URL and key are present and
    /// non-blank, the file backend under `data_dir` otherwise.
    pub fn resolve(
        data_dir: impl AsRef<Path>,
        remote_url: Option<&str>,
        remote_key: Option<&str>,
    ) -> Self {
        let url = remote_url.map(str::trim).filter(|s| !s.is_empty());
        let key = remote_key.map(str::trim).filter(|s| !s.is_empty());
        match (url, key) {
            (Some(url), Some(key)) => Self::remote(url, key),
            _ => Self::file(data_dir.as_ref()),
        }
    }

    pub const fn backend(&self) -> StoreBackend {
        match self {
            Self::File { .. } => StoreBackend::File,
            Self::Remote(_) => StoreBackend::Remote,
        }
    }
}
