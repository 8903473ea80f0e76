//! Ingest endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// The two telemetry kinds the relay knows how to forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointKind {
    WebVitals,
    Logs,
}

impl EndpointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebVitals => "web-vitals",
            Self::Logs => "logs",
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved ingest targets and credentials.
///
/// Built once at startup from the process environment and shared by
/// reference into the relay; request handling never re-reads the
/// environment. Either endpoint may be absent — the relay degrades to
/// pass-through (both absent) or drops the unconfigured kind (one absent).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestConfig {
    pub web_vitals_url: Option<Url>,
    pub logs_url: Option<Url>,
    /// Sent as `Bearer <token>` on every forwarded request, even when empty.
    pub token: String,
}

impl IngestConfig {
    /// Ingest URL for a kind, if that kind is configured.
    pub fn ingest_url(&self, kind: EndpointKind) -> Option<&Url> {
        match kind {
            EndpointKind::WebVitals => self.web_vitals_url.as_ref(),
            EndpointKind::Logs => self.logs_url.as_ref(),
        }
    }

    /// True when neither endpoint resolved; the relay is inert and lets
    /// every request pass through.
    pub fn is_unconfigured(&self) -> bool {
        self.web_vitals_url.is_none() && self.logs_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_ingest_url_selects_by_kind() {
        let config = IngestConfig {
            web_vitals_url: Some(url("https://api.axiom.co/v1/datasets/site/ingest")),
            logs_url: Some(url("https://api.axiom.co/v1/datasets/app/ingest")),
            token: "xaat-abc".to_string(),
        };

        assert_eq!(
            config.ingest_url(EndpointKind::WebVitals).map(Url::as_str),
            Some("https://api.axiom.co/v1/datasets/site/ingest")
        );
        assert_eq!(
            config.ingest_url(EndpointKind::Logs).map(Url::as_str),
            Some("https://api.axiom.co/v1/datasets/app/ingest")
        );
    }

    #[test]
    fn test_is_unconfigured_requires_both_absent() {
        assert!(IngestConfig::default().is_unconfigured());

        let partial = IngestConfig {
            logs_url: Some(url("https://api.axiom.co/v1/datasets/app/ingest")),
            ..IngestConfig::default()
        };
        assert!(!partial.is_unconfigured());
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = IngestConfig {
            web_vitals_url: None,
            logs_url: Some(url("https://api.axiom.co/v1/datasets/app/ingest")),
            token: "xaat-abc".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: IngestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_kind_display_matches_route_suffix() {
        assert_eq!(EndpointKind::WebVitals.to_string(), "web-vitals");
        assert_eq!(EndpointKind::Logs.to_string(), "logs");
    }
}
