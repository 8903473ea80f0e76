//! Forwarding errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while relaying a payload.
///
/// None of these ever reach the original caller; the relay answers 204
/// regardless and observes failures through logs only.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RelayError {
    /// Transport-level rejection of the outbound call (DNS, connect, timeout)
    #[error("Forwarding {kind} payload failed: {message}")]
    Transport { kind: String, message: String },

    /// The inbound body could not be buffered for forwarding
    #[error("Reading inbound {kind} body failed: {message}")]
    BodyRead { kind: String, message: String },

    /// The matched path's endpoint kind has no configured target
    #[error("No {kind} ingest endpoint configured, payload dropped")]
    EndpointNotConfigured { kind: String },
}

impl RelayError {
    /// True for failures of the outbound call itself, which go to the error
    /// sink; everything else is an inbound or configuration condition and is
    /// logged as a warning.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transport() {
        let transport = RelayError::Transport {
            kind: "logs".to_string(),
            message: "dns error".to_string(),
        };
        let dropped = RelayError::EndpointNotConfigured { kind: "logs".to_string() };

        assert!(transport.is_transport());
        assert!(!dropped.is_transport());
    }
}
