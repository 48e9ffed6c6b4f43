//! HTTP implementation of the gateway traits.
//!
//! Thin JSON-over-HTTP calls against the API gateway. Auth tokens ride
//! in httpOnly cookies managed by reqwest's cookie store; client logic
//! never reads them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use trustfund_core::error::{GatewayError, GatewayResult};
use trustfund_core::gateway::{AuthGateway, DonationGateway, RequestGateway};
use trustfund_core::models::donation::{DonationOrder, DonationReceipt};
use trustfund_core::models::request::StaffRequest;
use trustfund_core::models::user::{AuthSession, RegisterInput, SessionUser, UserRole};

use crate::error::{classify_server_message, extract_server_message, CONNECTION_MESSAGE};

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| GatewayError::transport(format!("client init failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue a request and fold the response into the normalized error
    /// taxonomy. Unreachable gateway and non-JSON bodies are transport
    /// errors; non-2xx JSON bodies are classified by message content.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> GatewayResult<T> {
        let response = request.send().await.map_err(|e| {
            warn!("gateway unreachable: {e}");
            GatewayError::transport(CONNECTION_MESSAGE)
        })?;

        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("non-JSON gateway response ({status}): {e}");
                return Err(GatewayError::transport(CONNECTION_MESSAGE));
            }
        };

        if !status.is_success() {
            let message = extract_server_message(&body)
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            return Err(classify_server_message(message));
        }

        serde_json::from_value(body)
            .map_err(|e| GatewayError::protocol(format!("unexpected response shape: {e}")))
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        self.execute(self.client.get(self.url(path))).await
    }
}

/// User shape as the gateway serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    id: i64,
    email: String,
    full_name: String,
    phone_number: Option<String>,
    avatar_url: Option<String>,
    /// Raw role string; parsed leniently (`ROLE_` prefixes and odd
    /// casing appear in the wild).
    role: Option<String>,
    verified: Option<bool>,
}

impl From<WireUser> for SessionUser {
    fn from(w: WireUser) -> Self {
        SessionUser {
            id: w.id,
            email: w.email,
            full_name: w.full_name,
            phone_number: w.phone_number,
            avatar_url: w.avatar_url,
            role: w
                .role
                .as_deref()
                .map(UserRole::parse_lenient)
                .unwrap_or(UserRole::User),
            verified: w.verified.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAuthResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct WireTokenResponse {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSessionResponse {
    session: Option<serde_json::Value>,
    user: Option<WireUser>,
}

/// Acknowledgement body with no payload.
#[derive(Debug, Deserialize)]
struct Ack {}

impl AuthGateway for HttpGateway {
    async fn send_otp(&self, email: &str) -> GatewayResult<()> {
        let _: Ack = self.post("/api/auth/send-otp", &json!({ "email": email })).await?;
        Ok(())
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> GatewayResult<String> {
        let resp: WireTokenResponse = self
            .post("/api/auth/verify-otp", &json!({ "email": email, "otp": otp }))
            .await?;
        // A 2xx without a token is a broken success, not a success.
        resp.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GatewayError::protocol("Failed to get reset token"))
    }

    async fn verify_email(&self, token: &str) -> GatewayResult<()> {
        let _: Ack = self.post("/api/auth/verify-email", &json!({ "token": token })).await?;
        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> GatewayResult<()> {
        let _: Ack = self
            .post(
                "/api/auth/reset-password",
                &json!({ "token": token, "newPassword": new_password }),
            )
            .await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> GatewayResult<AuthSession> {
        let resp: WireAuthResponse = self
            .post("/api/auth/login", &json!({ "email": email, "password": password }))
            .await?;
        Ok(AuthSession {
            user: resp.user.into(),
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
        })
    }

    async fn register(&self, input: RegisterInput) -> GatewayResult<AuthSession> {
        let resp: WireAuthResponse = self
            .post(
                "/api/auth/register",
                &json!({
                    "email": input.email,
                    "password": input.password,
                    "fullName": input.full_name,
                }),
            )
            .await?;
        Ok(AuthSession {
            user: resp.user.into(),
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
        })
    }

    async fn current_session(&self) -> GatewayResult<Option<SessionUser>> {
        let resp: WireSessionResponse = self.get("/api/auth/session").await?;
        match (resp.session, resp.user) {
            (Some(_), Some(user)) => Ok(Some(user.into())),
            _ => Ok(None),
        }
    }

    async fn logout(&self) -> GatewayResult<()> {
        let _: Ack = self.post("/api/auth/logout", &json!({})).await?;
        Ok(())
    }
}

impl RequestGateway for HttpGateway {
    async fn list_requests(&self) -> GatewayResult<Vec<StaffRequest>> {
        self.get("/api/staff/requests").await
    }

    async fn approve_request(&self, id: &str) -> GatewayResult<()> {
        let _: Ack = self
            .post(&format!("/api/staff/requests/{id}/approve"), &json!({}))
            .await?;
        Ok(())
    }

    async fn reject_request(&self, id: &str, note: &str) -> GatewayResult<()> {
        let _: Ack = self
            .post(
                &format!("/api/staff/requests/{id}/reject"),
                &json!({ "note": note }),
            )
            .await?;
        Ok(())
    }
}

impl DonationGateway for HttpGateway {
    async fn submit_donation(&self, order: &DonationOrder) -> GatewayResult<DonationReceipt> {
        self.post("/api/donations", order).await
    }
}
