//! The `/_axiom` interception layer.
//!
//! Mounted over a host router. Requests outside the reserved namespace,
//! namespace requests no suffix rule applies to, and all namespace requests
//! while no ingest endpoint is configured, continue into the host's own
//! routing untouched (`next.run`). Recognized telemetry routes are answered
//! here with a fixed empty 204, whatever the outbound outcome.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use axiom_relay_types::{EndpointKind, RelayError};

use crate::relay::server::RelayState;

/// Reserved route namespace the relay claims.
pub const RESERVED_PREFIX: &str = "/_axiom";

const WEB_VITALS_PREFIX: &str = "/_axiom/web-vitals";
const LOGS_PREFIX: &str = "/_axiom/logs";

/// Largest inbound payload the relay will buffer for forwarding.
pub const RELAY_BODY_LIMIT: usize = 1024 * 1024;

pub async fn relay_middleware(
    State(state): State<RelayState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if !path.starts_with(RESERVED_PREFIX) {
        return next.run(request).await;
    }

    if state.config.is_unconfigured() {
        // Emitted on every unconfigured invocation, not cached
        tracing::warn!("axiom ingest environment variables not detected, relay is disabled");
        tracing::warn!("sending web vitals to /dev/null");
        tracing::warn!("sending logs to console");
        return next.run(request).await;
    }

    // Suffix rules, checked in order
    let kind = if path.starts_with(WEB_VITALS_PREFIX) {
        EndpointKind::WebVitals
    } else if path.starts_with(LOGS_PREFIX) {
        EndpointKind::Logs
    } else {
        return next.run(request).await;
    };

    relay_and_ack(&state, kind, request).await
}

/// Forward the request body for `kind` and acknowledge the caller.
///
/// The acknowledgement is always `204 No Content` with an empty body.
/// Forwarding failures are logged and deliberately discarded — an explicit
/// no-op, never surfaced to the caller.
async fn relay_and_ack(state: &RelayState, kind: EndpointKind, request: Request) -> Response {
    if let Err(error) = try_forward(state, kind, request).await {
        if error.is_transport() {
            tracing::error!("{}", error);
        } else {
            tracing::warn!("{}", error);
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn try_forward(
    state: &RelayState,
    kind: EndpointKind,
    request: Request,
) -> Result<(), RelayError> {
    // One endpoint configured, the other kind's path hit: drop instead of
    // forwarding to a missing target
    let Some(url) = state.config.ingest_url(kind) else {
        return Err(RelayError::EndpointNotConfigured { kind: kind.to_string() });
    };

    let (_parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, RELAY_BODY_LIMIT).await.map_err(|e| {
        RelayError::BodyRead { kind: kind.to_string(), message: e.to_string() }
    })?;

    state.client.forward(kind, url, &state.config.token, bytes).await
}
