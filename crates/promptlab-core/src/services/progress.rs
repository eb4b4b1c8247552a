//! Progress stream encoder.
//!
//! Turns a sequential fan-out into a lazy stream of [`RunEvent`]s. The
//! status event for a model is yielded before its upstream call starts, and
//! the stream stays suspended on that call until it completes. Dropping the
//! stream abandons the in-flight call and every model after it.

use std::sync::Arc;

use async_stream::stream;
use futures_util::Stream;
use tracing::debug;

use crate::domain::RunRequest;
use crate::events::RunEvent;
use crate::ports::CompletionPort;

/// Build the event stream for `request`.
///
/// Yields `(status, result)` for each model in order, then a single
/// [`RunEvent::Done`]. Nothing is invoked until the stream is polled.
pub fn progress_events(
    client: Arc<dyn CompletionPort>,
    request: RunRequest,
    max_output_tokens: u32,
) -> impl Stream<Item = RunEvent> + Send + 'static {
    stream! {
        let RunRequest { prompt, models, .. } = request;
        let total = models.len();

        for (index, model) in models.iter().enumerate() {
            yield RunEvent::status(index, total, model);

            let outcome = client.invoke(model, &prompt, max_output_tokens).await;
            debug!(
                model = %model,
                current = index + 1,
                total,
                success = outcome.is_success(),
                "Streamed model outcome"
            );

            yield RunEvent::Result(outcome);
        }

        yield RunEvent::Done;
    }
}
