//! Networking modules for the procurement backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP round trips and `types` defines the wire schema
//! those calls decode into.

pub mod api;
pub mod types;
