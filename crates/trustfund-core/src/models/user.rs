//! Session user domain model.

use serde::{Deserialize, Serialize};

/// Role as issued by the identity backend.
///
/// Ordering matters: later variants hold every permission of earlier ones
/// (`User < FundOwner < Staff < Admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    FundOwner,
    Staff,
    Admin,
}

impl UserRole {
    /// Lenient parse of backend role strings. Accepts any case and a
    /// `ROLE_` prefix; anything unrecognized falls back to `User`.
    pub fn parse_lenient(raw: &str) -> Self {
        let upper = raw.trim().to_ascii_uppercase();
        let stripped = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match stripped {
            "ADMIN" => UserRole::Admin,
            "STAFF" => UserRole::Staff,
            "FUND_OWNER" => UserRole::FundOwner,
            _ => UserRole::User,
        }
    }

    /// Whether this role grants at least the permissions of `other`.
    pub fn at_least(self, other: UserRole) -> bool {
        self >= other
    }
}

/// The denormalized user snapshot owned by the session adapter.
///
/// The in-memory copy is canonical; a serialized copy is mirrored into
/// the snapshot store on every mutation so the UI can render immediately
/// after a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub verified: bool,
}

/// Shallow-merge patch for [`SessionUser`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSessionUser {
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub phone_number: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub verified: Option<bool>,
}

impl SessionUser {
    /// Apply a shallow merge, field by field. Unset patch fields leave the
    /// current value untouched.
    pub fn merge(&mut self, patch: UpdateSessionUser) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
    }
}

/// Registration input for the register endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Success shape of login/register.
///
/// Tokens are set as httpOnly cookies by the boundary layer and are
/// carried here opaquely; client logic never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}
