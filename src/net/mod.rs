//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! normalizes the server's three failure shapes into one tagged type.

pub mod api;
pub mod error;
pub mod types;
