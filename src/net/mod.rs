//! Networking modules for the ledger REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` builds merged request options, `transport` performs the browser
//! fetch, `client` classifies responses into values or `ApiError`s, `api`
//! binds the named endpoints and `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;
