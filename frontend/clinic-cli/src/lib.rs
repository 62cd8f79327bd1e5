//! clinic - command-line host for the clinic front-end core
//!
//! Drives the session store, access gates and directory typeahead against a
//! live clinic API, persisting the credential between invocations.

pub mod app;
pub mod error;
pub mod logger;

pub use app::{App, GateTarget, SearchTarget};
pub use error::{CliError, Result as CliResult};
