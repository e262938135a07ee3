//! Networking modules for the store's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` decorates every request with the current bearer credential;
//! `api` holds the typed auth calls that produce tokens.

pub mod api;
pub mod transport;

pub use transport::{ApiClient, ApiError};
