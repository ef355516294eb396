//! Shared service infrastructure for the grandline archive.
//!
//! This crate provides everything the daemon binary needs to serve the archive:
//! - Storage (one JSON document per collection in a flat data directory)
//! - State management (ServiceState carrying the injected store)
//! - HTTP handlers (collections, backup/restore, health) and the bearer gate
//! - A typed client for talking to a running service

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
pub mod store;

// Re-export key types for convenience
pub use config::Config;
pub use state::{State as ServiceState, StateSetupError};
pub use store::{Collection, Store, StoreError};

/// Version string reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
