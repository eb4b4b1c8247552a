//! Command handlers.
//!
//! Handlers are thin: they turn CLI input into core requests, call the
//! composed services, and format output for the terminal.

pub mod run;
pub mod serve;
