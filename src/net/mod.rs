//! Backend communication for the portal client.
//!
//! `types` holds the auth wire DTOs; `api` performs the requests and
//! classifies failures for display.

pub mod api;
pub mod types;
