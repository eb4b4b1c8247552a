//! System handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Liveness plus which optional integrations are configured.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        state.executor.is_configured(),
        state.stores.is_remote(),
    ))
}
