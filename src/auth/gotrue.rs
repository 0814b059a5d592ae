//! GoTrue (Supabase Auth) HTTP adapter.

use super::{AuthError, IdentityProvider, Session, User};
use crate::transport::{HttpReply, HttpTransport};
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub struct GoTrueProvider {
    transport: HttpTransport,
    anon_key: String,
}

#[derive(Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Value,
}

impl From<UserBody> for User {
    fn from(body: UserBody) -> Self {
        User {
            id: body.id,
            email: body.email.unwrap_or_default(),
            full_name: body
                .user_metadata
                .get("full_name")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
struct SessionBody {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    user: UserBody,
}

/// Sign-up answers with a bare user when confirmation is pending, or with a
/// session wrapping the user when it is not.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session { user: UserBody },
    User(UserBody),
}

impl GoTrueProvider {
    /// `base_url` is the project URL; the `/auth/v1` prefix is added here.
    pub fn new(base_url: &str, anon_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(base_url, timeout)?,
            anon_key: anon_key.into(),
        })
    }

    pub fn from_config(config: &crate::config::AuthConfig) -> Result<Self> {
        let base_url = config.base_url.as_deref().ok_or_else(|| {
            crate::Error::configuration_with_context(
                "Identity provider URL is not set",
                crate::ErrorContext::new()
                    .with_field_path("auth.base_url")
                    .with_source("gotrue"),
            )
        })?;
        Self::new(
            base_url,
            config.anon_key.clone().unwrap_or_default(),
            Duration::from_secs(30),
        )
    }

    async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        bearer: Option<&str>,
        body: &Value,
    ) -> std::result::Result<HttpReply, AuthError> {
        let url = self
            .transport
            .endpoint(path, query)
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let authorization = bearer.map(|token| format!("Bearer {}", token));
        let mut headers = vec![("apikey", self.anon_key.as_str())];
        if let Some(value) = authorization.as_deref() {
            headers.push(("Authorization", value));
        }
        debug!(path, "identity request");
        self.transport
            .post_json(url, &headers, body)
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
}

fn reply_error(reply: &HttpReply) -> AuthError {
    let body: Value = serde_json::from_str(&reply.body).unwrap_or(Value::Null);
    let code = body
        .get("error_code")
        .or_else(|| body.get("error"))
        .and_then(|v| v.as_str());
    let message = ["msg", "error_description", "message"]
        .iter()
        .find_map(|k| body.get(*k).and_then(|v| v.as_str()))
        .unwrap_or(reply.body.as_str());
    AuthError::from_provider_message(reply.status, code, message)
}

fn parse<T: for<'de> Deserialize<'de>>(reply: &HttpReply) -> std::result::Result<T, AuthError> {
    serde_json::from_str(&reply.body).map_err(|e| AuthError::Provider {
        status: reply.status,
        message: format!("Unexpected identity response: {}", e),
    })
}

#[async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn sign_in(&self, email: &str, password: &str) -> std::result::Result<Session, AuthError> {
        let body = json!({ "email": email, "password": password });
        let reply = self
            .post("auth/v1/token", &[("grant_type", "password")], None, &body)
            .await?;
        if !reply.is_success() {
            return Err(reply_error(&reply));
        }
        let s: SessionBody = parse(&reply)?;
        Ok(Session {
            access_token: s.access_token,
            refresh_token: s.refresh_token,
            expires_in: s.expires_in,
            user: s.user.into(),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> std::result::Result<User, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        });
        let reply = self.post("auth/v1/signup", &[], None, &body).await?;
        if !reply.is_success() {
            return Err(reply_error(&reply));
        }
        Ok(match parse::<SignUpBody>(&reply)? {
            SignUpBody::Session { user } | SignUpBody::User(user) => user.into(),
        })
    }

    async fn sign_out(&self, session: &Session) -> std::result::Result<(), AuthError> {
        let reply = self
            .post("auth/v1/logout", &[], Some(&session.access_token), &json!({}))
            .await?;
        if !reply.is_success() {
            return Err(reply_error(&reply));
        }
        Ok(())
    }
}
