//! Evaluation handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use promptlab_core::Evaluation;

use crate::dto::{EvaluationsResponse, OkResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// List evaluations, most recent first.
pub async fn list(State(state): State<AppState>) -> Result<Json<EvaluationsResponse>, HttpError> {
    let evaluations = state.stores.evaluations.list_all().await?;
    Ok(Json(EvaluationsResponse { evaluations }))
}

/// Get one evaluation.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Evaluation>, HttpError> {
    state
        .stores
        .evaluations
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Evaluation not found: {id}")))
}

/// Create or replace an evaluation. The rating must be 1-5.
pub async fn save(
    State(state): State<AppState>,
    payload: Result<Json<Evaluation>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let Json(evaluation) = payload?;
    evaluation.validate().map_err(HttpError::BadRequest)?;
    state.stores.evaluations.upsert(evaluation).await?;
    Ok(Json(OkResponse::ok()))
}

/// Delete an evaluation. Unknown ids succeed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, HttpError> {
    state.stores.evaluations.delete(&id).await?;
    Ok(Json(OkResponse::ok()))
}
