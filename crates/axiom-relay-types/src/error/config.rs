//! Configuration resolution errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving ingest configuration from the environment.
///
/// Resolution policy is warn-and-degrade: the caller logs these and leaves
/// the affected endpoint unset rather than aborting startup.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// An endpoint variable held a value that does not parse as a URL
    #[error("{var} is not a valid URL: {message}")]
    InvalidUrl { var: String, message: String },

    /// URL derivation was requested without a token to authorize it
    #[error("{var} is unset or empty, cannot derive an ingest URL")]
    MissingToken { var: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_names_the_variable() {
        let err = ConfigError::MissingToken { var: "AXIOM_TOKEN".to_string() };
        assert!(format!("{}", err).contains("AXIOM_TOKEN"));
    }
}
