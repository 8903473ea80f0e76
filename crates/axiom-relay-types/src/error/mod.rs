//! Typed error definitions for Axiom Relay.
//!
//! Two small domains cover everything that can go wrong here:
//!
//! - [`ConfigError`] - ingest configuration that failed to resolve
//! - [`RelayError`] - a forwarding attempt that did not reach the wire
//!
//! All errors are designed to be:
//!
//! - **Serializable** via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//!
//! A non-2xx answer from an ingestion service is deliberately NOT an error
//! anywhere in this hierarchy; the relay treats any HTTP response as a
//! delivered payload.

mod config;
mod relay;

pub use config::ConfigError;
pub use relay::RelayError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = ConfigError::InvalidUrl {
            var: "AXIOM_LOGS_ENDPOINT".to_string(),
            message: "relative URL without a base".to_string(),
        };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidUrl"));
        assert!(json.contains("AXIOM_LOGS_ENDPOINT"));

        let deserialized: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = RelayError::Transport {
            kind: "web-vitals".to_string(),
            message: "connection refused".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("web-vitals"));
        assert!(msg.contains("connection refused"));
    }
}
