//! Server-sent event framing for streamed runs.
//!
//! Each [`RunEvent`] becomes one `data: <json>` frame. The response ends
//! after the `done` event; if the client disconnects first, the body is
//! dropped and the run stops at its next suspension point.

use std::convert::Infallible;
use std::time::Duration;

use axum::http::header;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::BoxStream;
use promptlab_core::RunEvent;
use tokio_stream::StreamExt;

/// Interval between keep-alive comments while a model call is outstanding.
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Wrap a run's event stream in an SSE response.
pub fn progress_response(events: BoxStream<'static, RunEvent>) -> impl IntoResponse {
    let stream = events.filter_map(|event| match serde_json::to_string(&event) {
        Ok(json) => Some(Ok::<_, Infallible>(Event::default().data(json))),
        Err(e) => {
            tracing::warn!(kind = event.kind(), "Failed to serialize run event: {}", e);
            None
        }
    });

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(KEEP_ALIVE_INTERVAL)
                .text("ping"),
        ),
    )
}
