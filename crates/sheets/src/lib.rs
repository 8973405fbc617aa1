//! Google Sheets row-source.
//!
//! Authenticates with a service-account key, exchanges a signed JWT for
//! an OAuth access token, and reads named ranges through the Sheets v4
//! `values.get` endpoint.

pub mod api;
pub mod auth;
pub mod credentials;
pub mod error;

pub use api::SheetsApi;
pub use error::SheetsApiError;
