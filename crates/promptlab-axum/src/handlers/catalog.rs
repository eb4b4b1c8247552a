//! Catalog handlers - upstream models and prompt templates.

use axum::Json;
use axum::extract::State;

use crate::dto::{ModelsResponse, TemplatesResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// List models offered by the completion provider.
pub async fn models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, HttpError> {
    let models = state.catalog.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}

/// List prompt templates from the templates directory.
pub async fn templates(
    State(state): State<AppState>,
) -> Result<Json<TemplatesResponse>, HttpError> {
    let templates = state.templates.list().await?;
    Ok(Json(TemplatesResponse { templates }))
}
