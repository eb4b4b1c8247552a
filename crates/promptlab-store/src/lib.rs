//! Result store backends and the prompt template catalog.
//!
//! Two interchangeable [`RecordStore`](promptlab_core::RecordStore)
//! implementations live here: [`JsonFileStore`] keeps one JSON array per
//! record family on local disk, and [`RemoteTableStore`] talks to a
//! PostgREST-style table API. [`StoreFactory`] picks one at startup from a
//! [`StoreConfig`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod factory;
mod json_file;
mod remote;
mod templates;

pub use config::{DEFAULT_DATA_DIR, DEFAULT_REMOTE_TIMEOUT, RemoteTableConfig, StoreConfig};
pub use factory::StoreFactory;
pub use json_file::JsonFileStore;
pub use remote::RemoteTableStore;
pub use templates::{TemplateCatalog, TemplateError};

#[cfg(test)]
use wiremock as _;
