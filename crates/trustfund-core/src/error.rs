//! Error types for the TrustFund client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a normalized gateway failure.
///
/// Every response from the remote gateway is folded into exactly one of
/// these kinds at the HTTP boundary, before any controller sees it. The
/// duck-typed `error`/`message`/`errors[]` shapes of the wire never leak
/// past the transport crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayErrorKind {
    /// The gateway could not be reached, returned a non-JSON body, or the
    /// server message looked like leaked infrastructure detail. The
    /// message is always a generic user-safe string.
    Transport,
    /// A well-formed error response (e.g. "invalid OTP", "email already
    /// exists"). The server message is shown verbatim.
    Domain,
    /// A 2xx response that violated the expected success shape, such as a
    /// verify-OTP response with no `token` field.
    Protocol,
}

/// A normalized gateway failure: one tagged kind plus a user-facing
/// message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Domain,
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Protocol,
            message: message.into(),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum TrustfundError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid transition: {reason}")]
    InvalidTransition { reason: String },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TrustfundResult<T> = Result<T, TrustfundError>;
