//! clinic-client
//!
//! HTTP transport for the clinic REST API: authentication (login, whoami)
//! and the staff/user directory search used by typeahead pickers.

pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;

#[cfg(test)]
mod tests;

pub use api::{AuthApi, DirectoryApi, LoginResponse};
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
