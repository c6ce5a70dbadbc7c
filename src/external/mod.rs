//! Clients for external services.

pub mod client;
