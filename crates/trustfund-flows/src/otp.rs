//! OTP challenge controller.
//!
//! Drives the email -> code -> token sequence behind both password reset
//! and email verification. The step only ever advances forward on a
//! successful gateway call; every failure leaves the challenge where it
//! was, with a message for the user.

use tracing::debug;
use trustfund_core::gateway::AuthGateway;

use crate::config::FlowConfig;
use crate::cooldown::Cooldown;
use crate::error::FlowError;
use crate::password;

/// What the challenge is for. Password reset has a third step where the
/// new password is entered; email verification completes as soon as the
/// token is redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    PasswordReset,
    EmailVerification,
}

/// Current stage of the challenge. Advances monotonically, never skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStep {
    Email,
    Otp,
    Password,
    Done,
}

/// Outcome of a successful [`OtpChallenge::submit_otp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpAdvance {
    /// Password-reset variant: a reset token was issued, move to the
    /// password step.
    PasswordEntry,
    /// Email-verification variant: the account is now verified; the
    /// caller should mark the session user verified and redirect.
    EmailVerified,
}

/// A single OTP challenge. Created when the user opens the flow,
/// discarded (or [`reset`](Self::reset)) when they navigate away.
pub struct OtpChallenge<G: AuthGateway> {
    gateway: G,
    config: FlowConfig,
    purpose: OtpPurpose,
    step: OtpStep,
    email: String,
    reset_token: Option<String>,
    cooldown: Cooldown,
}

impl<G: AuthGateway> OtpChallenge<G> {
    pub fn new(gateway: G, purpose: OtpPurpose, config: FlowConfig) -> Self {
        Self {
            gateway,
            config,
            purpose,
            step: OtpStep::Email,
            email: String::new(),
            reset_token: None,
            cooldown: Cooldown::new(),
        }
    }

    pub fn step(&self) -> OtpStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn resend_cooldown_secs(&self) -> u32 {
        self.cooldown.remaining_secs()
    }

    /// Whether the resend affordance should be enabled.
    pub fn can_resend(&self) -> bool {
        self.step == OtpStep::Otp && self.cooldown.is_ready()
    }

    /// One scheduler tick of the resend countdown.
    pub fn tick(&mut self) {
        self.cooldown.tick();
    }

    /// Request a code for `email`, or resend one from the OTP step.
    ///
    /// The address is trimmed and lower-cased before use. While the
    /// cooldown is running this is rejected at the operation level, not
    /// just greyed out in the UI. The cooldown is only armed after the
    /// gateway accepts the send.
    pub async fn request_otp(&mut self, email: &str) -> Result<(), FlowError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(FlowError::EmptyEmail);
        }
        if self.step == OtpStep::Otp && !self.cooldown.is_ready() {
            return Err(FlowError::CooldownActive {
                remaining: self.cooldown.remaining_secs(),
            });
        }

        self.gateway.send_otp(&normalized).await?;

        self.email = normalized;
        if self.step == OtpStep::Email {
            self.step = OtpStep::Otp;
        }
        self.cooldown.start(self.config.resend_cooldown_secs);
        Ok(())
    }

    /// Redeem the emailed code.
    ///
    /// Only legal from the OTP step; a failed attempt stays there and the
    /// reset token remains unset. For email verification the token is
    /// redeemed immediately and the challenge completes.
    pub async fn submit_otp(&mut self, code: &str) -> Result<OtpAdvance, FlowError> {
        if self.step != OtpStep::Otp {
            return Err(FlowError::StepNotReached);
        }
        if code.len() != self.config.otp_length || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FlowError::MalformedOtp {
                expected: self.config.otp_length,
            });
        }

        let token = self.gateway.verify_otp(&self.email, code).await?;

        match self.purpose {
            OtpPurpose::PasswordReset => {
                self.reset_token = Some(token);
                self.step = OtpStep::Password;
                Ok(OtpAdvance::PasswordEntry)
            }
            OtpPurpose::EmailVerification => {
                self.gateway.verify_email(&token).await?;
                self.step = OtpStep::Done;
                Ok(OtpAdvance::EmailVerified)
            }
        }
    }

    /// Complete the password reset.
    ///
    /// The policy check runs entirely locally; no request is issued
    /// unless the password passes and matches its confirmation. The reset
    /// token is single-use: if the gateway rejects it, the flow restarts
    /// from the email step rather than retrying a consumed token.
    pub async fn submit_new_password(
        &mut self,
        new_password: &str,
        confirm: &str,
    ) -> Result<(), FlowError> {
        if self.step != OtpStep::Password {
            return Err(FlowError::StepNotReached);
        }
        password::check_policy(new_password, self.config.min_password_length)?;
        if new_password != confirm {
            return Err(FlowError::PasswordMismatch);
        }
        let token = self.reset_token.take().ok_or(FlowError::MissingResetToken)?;

        match self.gateway.reset_password(&token, new_password).await {
            Ok(()) => {
                self.step = OtpStep::Done;
                Ok(())
            }
            Err(e) => {
                debug!("reset rejected, restarting challenge from email step");
                self.step = OtpStep::Email;
                Err(e.into())
            }
        }
    }

    /// Discard all progress and return to the email step.
    pub fn reset(&mut self) {
        self.step = OtpStep::Email;
        self.email.clear();
        self.reset_token = None;
        self.cooldown = Cooldown::new();
    }
}
