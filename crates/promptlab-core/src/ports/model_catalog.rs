//! Model catalog port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ModelListing;

/// Errors from listing upstream models.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The provider answered with a non-success status.
    #[error("Model catalog request failed with status {status}")]
    Status { status: u16 },

    /// The request never completed.
    #[error("Model catalog unreachable: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Invalid model catalog response: {0}")]
    InvalidResponse(String),
}

/// Port for discovering which models the provider offers.
#[async_trait]
pub trait ModelCatalogPort: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelListing>, CatalogError>;
}
