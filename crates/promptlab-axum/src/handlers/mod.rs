//! HTTP request handlers for the Axum web server.
//!
//! Each submodule covers one API area. Handlers are thin wrappers that
//! delegate to the executor, stores and catalogs held in `AppState`.

pub mod catalog;
pub mod evaluations;
pub mod run;
pub mod system;
