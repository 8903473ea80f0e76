//! # Axiom Relay Core
//!
//! Relay logic for the `/_axiom` shim.
//!
//! ```text
//! axiom-relay-core/src/relay/
//! ├── config.rs      # environment resolution into IngestConfig
//! ├── forward.rs     # outbound POST to the ingest endpoints
//! ├── middleware.rs  # the /_axiom interception layer
//! └── server.rs      # router assembly and standalone server
//! ```
//!
//! The relay is a tower/axum layer: a host application mounts
//! [`relay::middleware::relay_middleware`] over its own router, and
//! everything the relay declines to handle continues into the host's
//! routing untouched. [`relay::server`] wraps the same layer into a
//! standalone binary surface.

pub mod relay;
