//! System status DTOs.

use serde::Serialize;

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a completion credential is present.
    pub api_key_configured: bool,
    /// Whether records go to the remote table store rather than local files.
    pub store_configured: bool,
}

impl HealthResponse {
    pub const fn ok(api_key_configured: bool, store_configured: bool) -> Self {
        Self {
            status: "ok",
            api_key_configured,
            store_configured,
        }
    }
}
