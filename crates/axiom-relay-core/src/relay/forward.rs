//! Outbound forwarding to the ingest endpoints.

use axiom_relay_types::{EndpointKind, RelayError};
use bytes::Bytes;
use reqwest::header;
use url::Url;

/// Client for the one-shot ingest forward.
///
/// Accepts a pre-built `reqwest::Client`: TLS state belongs at startup,
/// not on the request path. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ForwardClient {
    http: reqwest::Client,
}

impl ForwardClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST `body` to `url` with the relay's fixed header set.
    ///
    /// Any HTTP response counts as delivered — the ingest service's status
    /// and body are never inspected. Only a transport-level rejection (DNS,
    /// connect, timeout) maps to an error, and no retry is attempted.
    pub async fn forward(
        &self,
        kind: EndpointKind,
        url: &Url,
        token: &str,
        body: Bytes,
    ) -> Result<(), RelayError> {
        self.http
            .post(url.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::Transport {
                kind: kind.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("{} payload forwarded", kind);
        Ok(())
    }
}
