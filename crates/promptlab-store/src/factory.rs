//! Composition utilities for building [`Stores`] from a [`StoreConfig`].
//!
//! Construction only; no record logic lives here.

use std::sync::Arc;

use promptlab_core::{Evaluation, SavedTest, StoreError, Stores};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::transport_error;
use crate::json_file::JsonFileStore;
use crate::remote::RemoteTableStore;

/// Factory for the record store bundle.
pub struct StoreFactory;

impl StoreFactory {
    /// Build both record stores on the configured backend.
    ///
    /// The remote backend shares one HTTP client between the two tables.
    pub fn build_stores(config: &StoreConfig) -> Result<Stores, StoreError> {
        let backend = config.backend();

        let stores = match config {
            StoreConfig::File { data_dir } => {
                info!(data_dir = %data_dir.display(), "Using JSON file store");
                Stores::new(
                    Arc::new(JsonFileStore::<SavedTest>::new(data_dir)),
                    Arc::new(JsonFileStore::<Evaluation>::new(data_dir)),
                    backend,
                )
            }
            StoreConfig::Remote(remote) => {
                info!(url = %remote.base_url, "Using remote table store");
                let http = reqwest::Client::builder()
                    .timeout(remote.timeout)
                    .build()
                    .map_err(transport_error)?;
                Stores::new(
                    Arc::new(RemoteTableStore::<SavedTest>::with_client(
                        http.clone(),
                        remote,
                    )?),
                    Arc::new(RemoteTableStore::<Evaluation>::with_client(http, remote)?),
                    backend,
                )
            }
        };

        Ok(stores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlab_core::StoreBackend;

    #[test]
    fn test_file_config_builds_file_stores() {
        let stores = StoreFactory::build_stores(&StoreConfig::file("data")).unwrap();
        assert_eq!(stores.backend, StoreBackend::File);
        assert!(!stores.is_remote());
    }

    #[test]
    fn test_remote_config_builds_remote_stores() {
        let config = StoreConfig::remote("https://xyz.supabase.co", "key");
        let stores = StoreFactory::build_stores(&config).unwrap();
        assert!(stores.is_remote());
    }

    #[test]
    fn test_bad_remote_url_fails() {
        let config = StoreConfig::remote("not a url", "key");
        assert!(StoreFactory::build_stores(&config).is_err());
    }
}
