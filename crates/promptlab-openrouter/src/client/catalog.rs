//! `ModelCatalogPort` implementation.

use async_trait::async_trait;
use promptlab_core::{CatalogError, ModelCatalogPort, ModelListing};
use tracing::debug;

use super::OpenRouterClient;
use crate::error::{OpenRouterError, OpenRouterResult};
use crate::models::ModelsResponse;

impl OpenRouterClient {
    async fn fetch_models(&self) -> OpenRouterResult<Vec<ModelListing>> {
        let url = self.endpoint("models")?;
        debug!(url = %url, "Fetching model catalog");

        let response = self
            .decorate(self.http.get(url))
            .timeout(self.catalog_timeout)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(OpenRouterError::status(status.as_u16(), &text));
        }

        let parsed: ModelsResponse = serde_json::from_str(&text)?;
        Ok(parsed
            .data
            .into_iter()
            .take(self.catalog_limit)
            .map(|raw| ModelListing {
                id: raw.id,
                context_length: raw.context_length.unwrap_or(0),
                pricing: raw
                    .pricing
                    .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new())),
            })
            .collect())
    }
}

#[async_trait]
impl ModelCatalogPort for OpenRouterClient {
    async fn list_models(&self) -> Result<Vec<ModelListing>, CatalogError> {
        self.fetch_models().await.map_err(Into::into)
    }
}
