//! Run handlers - batch and streamed fan-out.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use promptlab_core::RunRequest;

use crate::dto::RunResponse;
use crate::error::HttpError;
use crate::sse::progress_response;
use crate::state::AppState;

/// Run the prompt against every model and return all outcomes at once.
pub async fn run(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<Json<RunResponse>, HttpError> {
    let Json(request) = payload?;
    let results = state.executor.run(&request).await?;
    Ok(Json(RunResponse { results }))
}

/// Run the prompt and stream progress as server-sent events.
///
/// Configuration and validation errors are answered with a normal error
/// response; once the stream starts it always ends with a `done` event
/// unless the client goes away.
pub async fn run_stream(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(request) = payload?;
    let events = state.executor.stream(request)?;
    Ok(progress_response(events))
}
