//! Core domain models for Axiom Relay.

mod config;

// Re-export all models
pub use config::{EndpointKind, IngestConfig};
