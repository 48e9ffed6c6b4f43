//! Shared fakes for the flow controller tests.
//!
//! Each fake counts its calls and can be armed with a domain error, so
//! tests can assert both what the controller did locally and exactly how
//! many requests it let through to the gateway.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trustfund_core::error::{GatewayError, GatewayResult, TrustfundError, TrustfundResult};
use trustfund_core::gateway::{AuthGateway, DonationGateway, RequestGateway, SnapshotStore};
use trustfund_core::models::donation::{DonationOrder, DonationReceipt};
use trustfund_core::models::request::StaffRequest;
use trustfund_core::models::user::{AuthSession, RegisterInput, SessionUser, UserRole};

pub fn sample_user(id: i64, full_name: &str) -> SessionUser {
    SessionUser {
        id,
        email: format!("user{id}@example.com"),
        full_name: full_name.into(),
        phone_number: None,
        avatar_url: None,
        role: UserRole::User,
        verified: true,
    }
}

fn armed(slot: &Mutex<Option<String>>) -> Option<GatewayError> {
    slot.lock()
        .unwrap()
        .as_deref()
        .map(GatewayError::domain)
}

// ---------------------------------------------------------------------
// Auth gateway fake
// ---------------------------------------------------------------------

#[derive(Default)]
struct FakeAuthInner {
    send_otp_calls: AtomicUsize,
    verify_otp_calls: AtomicUsize,
    verify_email_calls: AtomicUsize,
    reset_calls: AtomicUsize,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    session_calls: AtomicUsize,

    fail_send_otp: Mutex<Option<String>>,
    fail_verify_otp: Mutex<Option<String>>,
    fail_reset: Mutex<Option<String>>,
    fail_login: Mutex<Option<String>>,
    fail_logout: Mutex<Option<String>>,
    fail_session: Mutex<Option<String>>,

    issued_token: Mutex<String>,
    last_reset_token: Mutex<Option<String>>,
    last_verified_token: Mutex<Option<String>>,
    session_user: Mutex<Option<SessionUser>>,
    login_user: Mutex<Option<SessionUser>>,
}

/// Clonable handle; all clones share state so tests can keep one and
/// move another into the controller.
#[derive(Clone, Default)]
pub struct FakeAuth {
    inner: Arc<FakeAuthInner>,
}

impl FakeAuth {
    pub fn new() -> Self {
        let fake = Self::default();
        *fake.inner.issued_token.lock().unwrap() = "reset-token-1".into();
        fake
    }

    pub fn send_otp_calls(&self) -> usize {
        self.inner.send_otp_calls.load(Ordering::SeqCst)
    }
    pub fn verify_otp_calls(&self) -> usize {
        self.inner.verify_otp_calls.load(Ordering::SeqCst)
    }
    pub fn verify_email_calls(&self) -> usize {
        self.inner.verify_email_calls.load(Ordering::SeqCst)
    }
    pub fn reset_calls(&self) -> usize {
        self.inner.reset_calls.load(Ordering::SeqCst)
    }
    pub fn logout_calls(&self) -> usize {
        self.inner.logout_calls.load(Ordering::SeqCst)
    }

    pub fn last_reset_token(&self) -> Option<String> {
        self.inner.last_reset_token.lock().unwrap().clone()
    }
    pub fn last_verified_token(&self) -> Option<String> {
        self.inner.last_verified_token.lock().unwrap().clone()
    }

    pub fn fail_send_otp(&self, message: &str) {
        *self.inner.fail_send_otp.lock().unwrap() = Some(message.into());
    }
    pub fn fail_verify_otp(&self, message: &str) {
        *self.inner.fail_verify_otp.lock().unwrap() = Some(message.into());
    }
    pub fn fail_reset(&self, message: &str) {
        *self.inner.fail_reset.lock().unwrap() = Some(message.into());
    }
    pub fn fail_login(&self, message: &str) {
        *self.inner.fail_login.lock().unwrap() = Some(message.into());
    }
    pub fn fail_logout(&self, message: &str) {
        *self.inner.fail_logout.lock().unwrap() = Some(message.into());
    }
    pub fn fail_session(&self, message: &str) {
        *self.inner.fail_session.lock().unwrap() = Some(message.into());
    }

    /// What `current_session` reports (None = no live session).
    pub fn set_session_user(&self, user: Option<SessionUser>) {
        *self.inner.session_user.lock().unwrap() = user;
    }
    /// What `login`/`register` hand back on success.
    pub fn set_login_user(&self, user: SessionUser) {
        *self.inner.login_user.lock().unwrap() = Some(user);
    }
}

impl AuthGateway for FakeAuth {
    async fn send_otp(&self, _email: &str) -> GatewayResult<()> {
        if let Some(e) = armed(&self.inner.fail_send_otp) {
            return Err(e);
        }
        self.inner.send_otp_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn verify_otp(&self, _email: &str, _otp: &str) -> GatewayResult<String> {
        self.inner.verify_otp_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_verify_otp) {
            return Err(e);
        }
        Ok(self.inner.issued_token.lock().unwrap().clone())
    }

    async fn verify_email(&self, token: &str) -> GatewayResult<()> {
        self.inner.verify_email_calls.fetch_add(1, Ordering::SeqCst);
        *self.inner.last_verified_token.lock().unwrap() = Some(token.into());
        Ok(())
    }

    async fn reset_password(&self, token: &str, _new_password: &str) -> GatewayResult<()> {
        self.inner.reset_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_reset) {
            return Err(e);
        }
        *self.inner.last_reset_token.lock().unwrap() = Some(token.into());
        Ok(())
    }

    async fn login(&self, _email: &str, _password: &str) -> GatewayResult<AuthSession> {
        self.inner.login_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_login) {
            return Err(e);
        }
        let user = self
            .inner
            .login_user
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| sample_user(1, "Login User"));
        Ok(AuthSession {
            user,
            access_token: None,
            refresh_token: None,
        })
    }

    async fn register(&self, input: RegisterInput) -> GatewayResult<AuthSession> {
        if let Some(e) = armed(&self.inner.fail_login) {
            return Err(e);
        }
        let mut user = sample_user(2, &input.full_name);
        user.email = input.email;
        user.verified = false;
        Ok(AuthSession {
            user,
            access_token: None,
            refresh_token: None,
        })
    }

    async fn current_session(&self) -> GatewayResult<Option<SessionUser>> {
        self.inner.session_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_session) {
            return Err(e);
        }
        Ok(self.inner.session_user.lock().unwrap().clone())
    }

    async fn logout(&self) -> GatewayResult<()> {
        self.inner.logout_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_logout) {
            return Err(e);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------
// Request gateway fake
// ---------------------------------------------------------------------

#[derive(Default)]
struct FakeRequestsInner {
    rows: Mutex<Vec<StaffRequest>>,
    approve_calls: AtomicUsize,
    reject_calls: AtomicUsize,
    last_reject_note: Mutex<Option<String>>,
    fail_approve: Mutex<Option<String>>,
    fail_reject: Mutex<Option<String>>,
}

#[derive(Clone, Default)]
pub struct FakeRequests {
    inner: Arc<FakeRequestsInner>,
}

impl FakeRequests {
    pub fn with_rows(rows: Vec<StaffRequest>) -> Self {
        let fake = Self::default();
        *fake.inner.rows.lock().unwrap() = rows;
        fake
    }

    pub fn set_rows(&self, rows: Vec<StaffRequest>) {
        *self.inner.rows.lock().unwrap() = rows;
    }

    pub fn approve_calls(&self) -> usize {
        self.inner.approve_calls.load(Ordering::SeqCst)
    }
    pub fn reject_calls(&self) -> usize {
        self.inner.reject_calls.load(Ordering::SeqCst)
    }
    pub fn last_reject_note(&self) -> Option<String> {
        self.inner.last_reject_note.lock().unwrap().clone()
    }

    pub fn fail_approve(&self, message: &str) {
        *self.inner.fail_approve.lock().unwrap() = Some(message.into());
    }
    pub fn fail_reject(&self, message: &str) {
        *self.inner.fail_reject.lock().unwrap() = Some(message.into());
    }
}

impl RequestGateway for FakeRequests {
    async fn list_requests(&self) -> GatewayResult<Vec<StaffRequest>> {
        Ok(self.inner.rows.lock().unwrap().clone())
    }

    async fn approve_request(&self, _id: &str) -> GatewayResult<()> {
        if let Some(e) = armed(&self.inner.fail_approve) {
            return Err(e);
        }
        self.inner.approve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn reject_request(&self, _id: &str, note: &str) -> GatewayResult<()> {
        if let Some(e) = armed(&self.inner.fail_reject) {
            return Err(e);
        }
        self.inner.reject_calls.fetch_add(1, Ordering::SeqCst);
        *self.inner.last_reject_note.lock().unwrap() = Some(note.into());
        Ok(())
    }
}

// ---------------------------------------------------------------------
// Donation gateway fake
// ---------------------------------------------------------------------

#[derive(Default)]
struct FakePaymentsInner {
    submit_calls: AtomicUsize,
    last_order: Mutex<Option<DonationOrder>>,
    fail_submit: Mutex<Option<String>>,
}

#[derive(Clone, Default)]
pub struct FakePayments {
    inner: Arc<FakePaymentsInner>,
}

impl FakePayments {
    pub fn submit_calls(&self) -> usize {
        self.inner.submit_calls.load(Ordering::SeqCst)
    }
    pub fn last_order(&self) -> Option<DonationOrder> {
        self.inner.last_order.lock().unwrap().clone()
    }
    pub fn fail_submit(&self, message: &str) {
        *self.inner.fail_submit.lock().unwrap() = Some(message.into());
    }
    pub fn clear_failure(&self) {
        *self.inner.fail_submit.lock().unwrap() = None;
    }
}

impl DonationGateway for FakePayments {
    async fn submit_donation(&self, order: &DonationOrder) -> GatewayResult<DonationReceipt> {
        self.inner.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = armed(&self.inner.fail_submit) {
            return Err(e);
        }
        *self.inner.last_order.lock().unwrap() = Some(order.clone());
        Ok(DonationReceipt {
            reference: format!("DON-{:04}", self.submit_calls()),
            total_amount: order.total_amount,
            paid_at: chrono::Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------
// Snapshot store fake
// ---------------------------------------------------------------------

#[derive(Default)]
struct FakeStoreInner {
    slot: Mutex<Option<SessionUser>>,
    fail_load: Mutex<bool>,
}

#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<FakeStoreInner>,
}

impl FakeStore {
    pub fn with_snapshot(user: SessionUser) -> Self {
        let fake = Self::default();
        *fake.inner.slot.lock().unwrap() = Some(user);
        fake
    }

    pub fn snapshot(&self) -> Option<SessionUser> {
        self.inner.slot.lock().unwrap().clone()
    }

    /// Make the next (and every subsequent) load fail as corrupt.
    pub fn fail_load(&self) {
        *self.inner.fail_load.lock().unwrap() = true;
    }
}

impl SnapshotStore for FakeStore {
    fn load(&self) -> TrustfundResult<Option<SessionUser>> {
        if *self.inner.fail_load.lock().unwrap() {
            return Err(TrustfundError::Persistence("corrupt snapshot".into()));
        }
        Ok(self.inner.slot.lock().unwrap().clone())
    }

    fn save(&self, user: &SessionUser) -> TrustfundResult<()> {
        *self.inner.slot.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> TrustfundResult<()> {
        *self.inner.slot.lock().unwrap() = None;
        *self.inner.fail_load.lock().unwrap() = false;
        Ok(())
    }
}
