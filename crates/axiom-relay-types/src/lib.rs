//! # Axiom Relay Types
//!
//! Models and error definitions for the Axiom relay shim.
//!
//! This crate provides the foundational type system for the relay:
//!
//! - **`error`** - Typed error hierarchy for configuration and forwarding
//! - **`models`** - Domain models (`EndpointKind`, `IngestConfig`)
//!
//! ## Architecture Role
//!
//! `axiom-relay-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     axiom-relay-types (this crate)
//!             │
//!             ▼
//!     axiom-relay-core
//!             │
//!             ▼
//!     axiom-relay-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, RelayError};

// Re-export core model types
pub use models::{EndpointKind, IngestConfig};
