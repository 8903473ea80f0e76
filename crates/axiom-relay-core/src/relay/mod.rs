//! Relay module - request-forwarding shim for the `/_axiom` namespace.
//!
//! For each inbound request under the reserved prefix the relay resolves
//! the target ingest endpoint by path suffix, forwards the body with the
//! configured bearer token, and acknowledges the caller with an empty 204.
//! Everything else passes through.

pub mod config;
pub mod forward;
pub mod middleware;
pub mod server;

// Re-exports
pub use forward::ForwardClient;
pub use middleware::{relay_middleware, RELAY_BODY_LIMIT, RESERVED_PREFIX};
pub use server::{build_relay_router, RelayServer, RelayState, ServerStartConfig};
