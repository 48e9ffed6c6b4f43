//! Local password policy checks.
//!
//! The reset flow validates the new password entirely client-side before
//! any network call: minimum length, mixed case, a digit, and a symbol.
//! Hashing is the backend's job; nothing here touches crypto.

use crate::error::FlowError;

/// Characters accepted as the required symbol.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Check a candidate password against the reset policy.
///
/// Returns the first violation so the UI can show one specific message
/// at a time, matching the requirement checklist order.
pub fn check_policy(password: &str, min_length: usize) -> Result<(), FlowError> {
    if password.chars().count() < min_length {
        return Err(FlowError::PasswordTooShort { min: min_length });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(FlowError::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(FlowError::PasswordNeedsLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(FlowError::PasswordNeedsDigit);
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        return Err(FlowError::PasswordNeedsSymbol);
    }
    Ok(())
}
