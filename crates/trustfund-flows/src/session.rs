//! Session adapter — the single owner of the authenticated user.
//!
//! Holds the canonical in-memory `SessionUser` and mirrors every
//! mutation into the snapshot store, so the UI can render a signed-in
//! state immediately after reload while the remote session is
//! revalidated. No other component writes the snapshot.

use tracing::warn;
use trustfund_core::gateway::{AuthGateway, SnapshotStore};
use trustfund_core::models::user::{RegisterInput, SessionUser, UpdateSessionUser};

use crate::error::FlowError;

pub struct SessionAdapter<G: AuthGateway, S: SnapshotStore> {
    gateway: G,
    store: S,
    user: Option<SessionUser>,
    initialized: bool,
}

impl<G: AuthGateway, S: SnapshotStore> SessionAdapter<G, S> {
    /// Construct the adapter. Nothing is loaded until
    /// [`initialize`](Self::initialize) runs — construction has no side
    /// effects.
    pub fn new(gateway: G, store: S) -> Self {
        Self {
            gateway,
            store,
            user: None,
            initialized: false,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.verified)
    }

    /// Whether startup revalidation has completed (the UI's `loading`
    /// flag is the negation of this).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Startup sequence: optimistically adopt the persisted snapshot,
    /// then revalidate with the gateway. A revalidation that does not
    /// positively confirm a session clears both copies — a stale local
    /// snapshot is never trusted over the gateway's answer.
    pub async fn initialize(&mut self) {
        match self.store.load() {
            Ok(snapshot) => self.user = snapshot,
            Err(e) => {
                warn!("discarding unreadable session snapshot: {e}");
                let _ = self.store.clear();
                self.user = None;
            }
        }

        match self.gateway.current_session().await {
            Ok(Some(user)) => self.set_user(user),
            Ok(None) => self.clear_user(),
            Err(e) => {
                warn!("session revalidation failed, signing out locally: {e}");
                self.clear_user();
            }
        }
        self.initialized = true;
    }

    /// Exchange credentials for a session. On failure the prior state is
    /// left untouched and the error is returned as a value.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), FlowError> {
        let session = self.gateway.login(email, password).await?;
        self.set_user(session.user);
        Ok(())
    }

    pub async fn sign_up(&mut self, input: RegisterInput) -> Result<(), FlowError> {
        let session = self.gateway.register(input).await?;
        self.set_user(session.user);
        Ok(())
    }

    /// Sign out. Local state is cleared unconditionally: a failing
    /// remote revoke must never leave the user stuck signed in, so the
    /// network error is only logged.
    pub async fn logout(&mut self) {
        if let Err(e) = self.gateway.logout().await {
            warn!("remote logout failed, clearing local session anyway: {e}");
        }
        self.clear_user();
    }

    /// Shallow-merge profile fields into the current user and re-persist
    /// the snapshot. No-op when signed out.
    pub fn update_user(&mut self, patch: UpdateSessionUser) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.merge(patch);
        if let Err(e) = self.store.save(user) {
            warn!("failed to persist session snapshot: {e}");
        }
    }

    fn set_user(&mut self, user: SessionUser) {
        if let Err(e) = self.store.save(&user) {
            warn!("failed to persist session snapshot: {e}");
        }
        self.user = Some(user);
    }

    fn clear_user(&mut self) {
        self.user = None;
        if let Err(e) = self.store.clear() {
            warn!("failed to clear session snapshot: {e}");
        }
    }
}
