//! Environment resolution for ingest configuration.
//!
//! Targets are read once at startup. Per kind, an explicit endpoint
//! override wins; otherwise the URL is derived from the base URL and
//! dataset. Invalid or incomplete settings degrade to an unset endpoint
//! with a warning — resolution itself never fails.

use axiom_relay_types::{ConfigError, EndpointKind, IngestConfig};
use url::Url;

pub const ENV_TOKEN: &str = "AXIOM_TOKEN";
pub const ENV_DATASET: &str = "AXIOM_DATASET";
pub const ENV_BASE_URL: &str = "AXIOM_URL";
pub const ENV_WEB_VITALS_ENDPOINT: &str = "AXIOM_WEB_VITALS_ENDPOINT";
pub const ENV_LOGS_ENDPOINT: &str = "AXIOM_LOGS_ENDPOINT";

const DEFAULT_BASE_URL: &str = "https://api.axiom.co";

/// Resolve ingest configuration from the process environment.
pub fn from_env() -> IngestConfig {
    resolve(|var| std::env::var(var).ok())
}

/// Resolve ingest configuration through `lookup`.
///
/// Pure over the lookup function so tests never touch the process
/// environment.
pub fn resolve<F>(lookup: F) -> IngestConfig
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(ENV_TOKEN).map(|v| v.trim().to_string()).unwrap_or_default();

    let web_vitals_url = resolve_kind(&lookup, EndpointKind::WebVitals, &token)
        .unwrap_or_else(|error| {
            tracing::warn!("{}, leaving {} endpoint unset", error, EndpointKind::WebVitals);
            None
        });
    let logs_url = resolve_kind(&lookup, EndpointKind::Logs, &token).unwrap_or_else(|error| {
        tracing::warn!("{}, leaving {} endpoint unset", error, EndpointKind::Logs);
        None
    });

    IngestConfig { web_vitals_url, logs_url, token }
}

fn resolve_kind<F>(
    lookup: &F,
    kind: EndpointKind,
    token: &str,
) -> Result<Option<Url>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let override_var = match kind {
        EndpointKind::WebVitals => ENV_WEB_VITALS_ENDPOINT,
        EndpointKind::Logs => ENV_LOGS_ENDPOINT,
    };

    if let Some(raw) = non_empty(lookup(override_var)) {
        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            var: override_var.to_string(),
            message: e.to_string(),
        })?;
        return Ok(Some(url));
    }

    let Some(dataset) = non_empty(lookup(ENV_DATASET)) else {
        return Ok(None);
    };

    // Derived URLs are only useful with a token to authorize them
    if token.is_empty() {
        return Err(ConfigError::MissingToken { var: ENV_TOKEN.to_string() });
    }

    let base = non_empty(lookup(ENV_BASE_URL))
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let raw = format!("{}/v1/datasets/{}/ingest", base, dataset);
    Url::parse(&raw).map(Some).map_err(|e| ConfigError::InvalidUrl {
        var: ENV_BASE_URL.to_string(),
        message: e.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_empty_environment_is_unconfigured() {
        let config = resolve(env(&[]));
        assert!(config.is_unconfigured());
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_derived_urls_from_dataset_and_token() {
        let config = resolve(env(&[(ENV_DATASET, "site"), (ENV_TOKEN, "xaat-abc")]));

        let expected = "https://api.axiom.co/v1/datasets/site/ingest";
        assert_eq!(config.web_vitals_url.as_ref().map(Url::as_str), Some(expected));
        assert_eq!(config.logs_url.as_ref().map(Url::as_str), Some(expected));
        assert_eq!(config.token, "xaat-abc");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let config = resolve(env(&[
            (ENV_DATASET, "site"),
            (ENV_TOKEN, "xaat-abc"),
            (ENV_BASE_URL, "https://axiom.internal.example/"),
        ]));

        assert_eq!(
            config.logs_url.as_ref().map(Url::as_str),
            Some("https://axiom.internal.example/v1/datasets/site/ingest")
        );
    }

    #[test]
    fn test_explicit_endpoint_override_wins() {
        let config = resolve(env(&[
            (ENV_DATASET, "site"),
            (ENV_TOKEN, "xaat-abc"),
            (ENV_LOGS_ENDPOINT, "https://ingest.example/logs"),
        ]));

        assert_eq!(
            config.logs_url.as_ref().map(Url::as_str),
            Some("https://ingest.example/logs")
        );
        // The other kind still derives
        assert_eq!(
            config.web_vitals_url.as_ref().map(Url::as_str),
            Some("https://api.axiom.co/v1/datasets/site/ingest")
        );
    }

    #[test]
    fn test_invalid_override_degrades_to_unset() {
        let config = resolve(env(&[(ENV_WEB_VITALS_ENDPOINT, "not a url")]));
        assert!(config.web_vitals_url.is_none());
    }

    #[test]
    fn test_dataset_without_token_degrades_to_unset() {
        let config = resolve(env(&[(ENV_DATASET, "site")]));
        assert!(config.is_unconfigured());
    }

    #[test]
    fn test_explicit_override_does_not_require_token() {
        let config = resolve(env(&[(ENV_LOGS_ENDPOINT, "https://ingest.example/logs")]));
        assert!(config.logs_url.is_some());
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_whitespace_values_are_treated_as_unset() {
        let config = resolve(env(&[(ENV_DATASET, "  "), (ENV_TOKEN, "xaat-abc")]));
        assert!(config.is_unconfigured());
    }
}
