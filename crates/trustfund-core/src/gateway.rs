//! Trait seams between the flow controllers and the outside world.
//!
//! The remote API gateway is an opaque JSON-over-HTTP collaborator; the
//! flow crates only ever see these traits and the normalized
//! [`GatewayError`](crate::error::GatewayError) they return. All network
//! operations are async; the snapshot store models browser-local storage
//! and is synchronous.

use crate::error::{GatewayResult, TrustfundResult};
use crate::models::donation::{DonationOrder, DonationReceipt};
use crate::models::request::StaffRequest;
use crate::models::user::{AuthSession, RegisterInput, SessionUser};

/// Authentication and verification endpoints of the remote gateway.
pub trait AuthGateway: Send + Sync {
    /// Request a one-time code be emailed to `email`. Exactly one
    /// outbound verification email per successful call.
    fn send_otp(&self, email: &str) -> impl Future<Output = GatewayResult<()>> + Send;

    /// Exchange a code for an opaque one-time token. A 2xx response
    /// without a token is a protocol error, not a success.
    fn verify_otp(
        &self,
        email: &str,
        otp: &str,
    ) -> impl Future<Output = GatewayResult<String>> + Send;

    /// Mark the account behind `token` as email-verified.
    fn verify_email(&self, token: &str) -> impl Future<Output = GatewayResult<()>> + Send;

    /// Complete a password reset. The token is consumed server-side.
    fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> impl Future<Output = GatewayResult<()>> + Send;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = GatewayResult<AuthSession>> + Send;

    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = GatewayResult<AuthSession>> + Send;

    /// Revalidate the cookie-backed session. `Ok(None)` means the
    /// gateway explicitly reported no live session.
    fn current_session(&self) -> impl Future<Output = GatewayResult<Option<SessionUser>>> + Send;

    /// Revoke the current session server-side.
    fn logout(&self) -> impl Future<Output = GatewayResult<()>> + Send;
}

/// The staff review queue triad.
pub trait RequestGateway: Send + Sync {
    fn list_requests(&self) -> impl Future<Output = GatewayResult<Vec<StaffRequest>>> + Send;
    fn approve_request(&self, id: &str) -> impl Future<Output = GatewayResult<()>> + Send;
    fn reject_request(
        &self,
        id: &str,
        note: &str,
    ) -> impl Future<Output = GatewayResult<()>> + Send;
}

/// Payment processing for a composed donation.
pub trait DonationGateway: Send + Sync {
    fn submit_donation(
        &self,
        order: &DonationOrder,
    ) -> impl Future<Output = GatewayResult<DonationReceipt>> + Send;
}

/// Durable storage for the serialized [`SessionUser`] snapshot.
///
/// One fixed slot, overwritten wholesale on every save — merging happens
/// in memory before the write. Only the session adapter writes through
/// this trait; every other component reads the adapter's published copy.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> TrustfundResult<Option<SessionUser>>;
    fn save(&self, user: &SessionUser) -> TrustfundResult<()>;
    fn clear(&self) -> TrustfundResult<()>;
}
