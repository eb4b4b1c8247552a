//! PostgREST-style remote table implementation of [`RecordStore`].
//!
//! Speaks the dialect Supabase exposes under `/rest/v1`: one row per record,
//! upsert by primary key through `on_conflict=id` plus a merge preference,
//! and filters written as `column=eq.value`.

use std::marker::PhantomData;

use async_trait::async_trait;
use promptlab_core::{Record, RecordStore, StoreError};
use tracing::debug;
use url::Url;

use crate::config::RemoteTableConfig;
use crate::error::{json_error, remote_error, transport_error};

const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=minimal";

/// Remote table store for one record family. The table is named after
/// [`Record::COLLECTION`].
pub struct RemoteTableStore<R> {
    http: reqwest::Client,
    table_url: Url,
    api_key: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RemoteTableStore<R> {
    /// Build a store with its own HTTP client.
    pub fn new(config: &RemoteTableConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport_error)?;
        Self::with_client(http, config)
    }

    /// Build a store on a shared HTTP client.
    pub fn with_client(
        http: reqwest::Client,
        config: &RemoteTableConfig,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            http,
            table_url: table_url(&config.base_url, R::COLLECTION)?,
            api_key: config.api_key.clone(),
            _record: PhantomData,
        })
    }

    fn url_with(&self, pairs: &[(&str, &str)]) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut().extend_pairs(pairs);
        url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a request and turn any non-2xx answer into [`StoreError::Remote`].
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(remote_error(status.as_u16(), &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for RemoteTableStore<R> {
    async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        let url = self.url_with(&[("select", "*"), ("order", "created_at.desc")]);
        debug!(table = R::COLLECTION, "Listing remote rows");

        let body = self.send(self.http.get(url)).await?;
        serde_json::from_str(&body).map_err(json_error)
    }

    async fn upsert(&self, record: R) -> Result<(), StoreError> {
        let url = self.url_with(&[("on_conflict", "id")]);
        debug!(table = R::COLLECTION, id = %record.id(), "Upserting remote row");

        let request = self
            .http
            .post(url)
            .header("Prefer", UPSERT_PREFERENCE)
            .json(&[record]);
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let filter = format!("eq.{id}");
        let url = self.url_with(&[("id", filter.as_str())]);
        debug!(table = R::COLLECTION, id = %id, "Deleting remote row");

        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

fn table_url(base_url: &str, table: &str) -> Result<Url, StoreError> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|e| StoreError::Transport(format!("invalid store URL '{base_url}': {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("rest/v1/{table}"))
        .map_err(|e| StoreError::Transport(format!("invalid store URL '{base_url}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlab_core::SavedTest;

    #[test]
    fn test_table_url_from_bare_host() {
        let url = table_url("https://xyz.supabase.co", "tests").unwrap();
        assert_eq!(url.as_str(), "https://xyz.supabase.co/rest/v1/tests");
    }

    #[test]
    fn test_table_url_keeps_base_path() {
        let url = table_url("http://localhost:54321/proxy", "evaluations").unwrap();
        assert_eq!(url.as_str(), "http://localhost:54321/proxy/rest/v1/evaluations");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = table_url("::not a url::", "tests").unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[test]
    fn test_delete_filter_is_encoded() {
        let config = RemoteTableConfig::new("https://x.supabase.co", "k");
        let store = RemoteTableStore::<SavedTest>::new(&config).unwrap();
        let url = store.url_with(&[("id", "eq.a b&c")]);
        assert_eq!(url.query(), Some("id=eq.a+b%26c"));
    }
}
