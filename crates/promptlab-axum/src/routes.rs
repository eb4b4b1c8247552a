//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// All API routes without the `/api` prefix; the caller nests them and
/// applies `.with_state()`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Runs
        .route("/run", post(handlers::run::run))
        .route("/run-stream", post(handlers::run::run_stream))
        // Saved tests
        .route(
            "/tests",
            get(handlers::saved_tests::list).post(handlers::saved_tests::save),
        )
        .route(
            "/tests/{id}",
            get(handlers::saved_tests::get).delete(handlers::saved_tests::remove),
        )
        // Evaluations
        .route(
            "/evaluations",
            get(handlers::evaluations::list).post(handlers::evaluations::save),
        )
        .route(
            "/evaluations/{id}",
            get(handlers::evaluations::get).delete(handlers::evaluations::remove),
        )
        // Catalogs
        .route("/templates", get(handlers::catalog::templates))
        .route("/models", get(handlers::catalog::models))
        // System
        .route("/health", get(handlers::system::health))
}

/// Create the main Axum router with all API routes under `/api`.
///
/// For serving the browser UI as well, use [`create_spa_router`].
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// API routes take priority. Any other path is served from `static_dir`,
/// falling back to `index.html` so client-side routing works.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    create_router(ctx, cors_config).fallback_service(serve_dir)
}
