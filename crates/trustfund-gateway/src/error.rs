//! Boundary error normalization.
//!
//! Server-provided messages are shown to the user verbatim, except when
//! they look like leaked infrastructure detail (proxy 404/502 pages,
//! DNS failures, framework "static resource" errors). Those are
//! rewritten to one generic connection message so internals never reach
//! the screen.
//!
//! The substring match is inherited from the backend gateway contract
//! and is known to be brittle; the `GatewayErrorKind` tag exists so
//! callers can migrate to status-based handling without re-parsing
//! messages.

use tracing::warn;
use trustfund_core::error::GatewayError;

/// Generic user-safe message for anything classified as a transport
/// failure.
pub const CONNECTION_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

/// Markers of infrastructure errors that must never surface verbatim.
const INFRA_MARKERS: &[&str] = &["static resource", "No static", "404", "502", "ENOTFOUND"];

/// Pull a human-readable message out of a gateway error body.
///
/// The wire is duck-typed: bodies may carry `error`, `message`, or an
/// `errors` array, or be a bare string.
pub fn extract_server_message(body: &serde_json::Value) -> Option<String> {
    if let Some(s) = body.as_str() {
        return Some(s.to_string());
    }
    for key in ["error", "message"] {
        if let Some(s) = body.get(key).and_then(|v| v.as_str()) {
            return Some(s.to_string());
        }
    }
    body.get("errors")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first())
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Normalize a server-provided error message into a [`GatewayError`].
///
/// Messages carrying infra markers become generic transport errors;
/// everything else is a domain error shown verbatim.
pub fn classify_server_message(message: String) -> GatewayError {
    if INFRA_MARKERS.iter().any(|m| message.contains(m)) {
        warn!("rewriting leaked infrastructure error: {message}");
        GatewayError::transport(CONNECTION_MESSAGE)
    } else {
        GatewayError::domain(message)
    }
}
