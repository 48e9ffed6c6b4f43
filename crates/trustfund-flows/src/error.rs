//! Flow error types.
//!
//! Every variant carries the specific user-facing message for one local
//! validation failure or misuse; gateway failures pass through with their
//! already-normalized message.

use thiserror::Error;
use trustfund_core::error::{GatewayError, TrustfundError};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Please enter your email address")]
    EmptyEmail,

    #[error("Please wait {remaining}s before requesting another code")]
    CooldownActive { remaining: u32 },

    #[error("Enter the {expected}-digit code sent to your email")]
    MalformedOtp { expected: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password must contain an uppercase letter")]
    PasswordNeedsUppercase,

    #[error("Password must contain a lowercase letter")]
    PasswordNeedsLowercase,

    #[error("Password must contain a number")]
    PasswordNeedsDigit,

    #[error("Password must contain a symbol")]
    PasswordNeedsSymbol,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Reset token is missing. Please start over")]
    MissingResetToken,

    #[error("This step is not available yet")]
    StepNotReached,

    #[error("Unknown catalog item: {item_id}")]
    UnknownItem { item_id: String },

    #[error("Donation amount must be greater than zero")]
    NothingToPay,

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("You must accept the terms to continue")]
    TermsNotAccepted,

    #[error("A rejection note is required")]
    EmptyRejectionNote,

    #[error("Request not found: {id}")]
    RequestNotFound { id: String },

    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl From<FlowError> for TrustfundError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Gateway(e) => TrustfundError::Gateway(e),
            other => TrustfundError::Validation {
                message: other.to_string(),
            },
        }
    }
}
