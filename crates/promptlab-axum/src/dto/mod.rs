//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Response envelopes wrapping core types. Field names are snake_case to
//! match what the browser client already reads.

pub mod records;
pub mod run;
pub mod system;

pub use records::{EvaluationsResponse, OkResponse, TestsResponse};
pub use run::{ModelsResponse, RunResponse, TemplatesResponse};
pub use system::HealthResponse;
