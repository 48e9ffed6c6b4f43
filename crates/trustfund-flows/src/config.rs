//! Flow configuration.

/// Configuration shared by the flow controllers.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Length of the emailed one-time code.
    pub otp_length: usize,
    /// Seconds a user must wait before requesting another code.
    pub resend_cooldown_secs: u32,
    /// Minimum password length for the reset policy.
    pub min_password_length: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            otp_length: 6,
            resend_cooldown_secs: 60,
            min_password_length: 12,
        }
    }
}
