//! Core services orchestrating the ports.

pub mod fan_out;
pub mod progress;

pub use fan_out::{FanOutExecutor, MISSING_API_KEY, RunError};
pub use progress::progress_events;
