//! User identity.
//!
//! [`IdentityProvider`] is the boundary to the hosted auth service;
//! [`AuthClient`] keeps the current session and broadcasts sign-in and
//! sign-out events to any number of subscribers.

mod error;
pub mod gotrue;

pub use error::AuthError;
pub use gotrue::GoTrueProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthEvent {
    SignedIn { user: User },
    SignedOut,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Registers a user. Most deployments require email confirmation before
    /// the first sign-in, so no session is returned.
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<User, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

const EVENT_CAPACITY: usize = 16;

/// Session holder over an [`IdentityProvider`].
pub struct AuthClient {
    provider: Arc<dyn IdentityProvider>,
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl AuthClient {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            provider,
            session: RwLock::new(None),
            events,
        }
    }

    /// Receive every auth state change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    pub async fn get_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = match self.provider.sign_in(email, password).await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "sign-in failed");
                return Err(e);
            }
        };
        *self.session.write().await = Some(session.clone());
        info!(user_id = %session.user.id, "signed in");
        // No subscribers is fine.
        let _ = self.events.send(AuthEvent::SignedIn {
            user: session.user.clone(),
        });
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<User, AuthError> {
        self.provider.sign_up(email, password, full_name).await
    }

    /// Clears the local session even when the provider call fails; the
    /// provider error is still returned.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.session.write().await.take() else {
            return Ok(());
        };
        let outcome = self.provider.sign_out(&session).await;
        if let Err(e) = &outcome {
            warn!(error = %e, "provider sign-out failed");
        }
        info!(user_id = %session.user.id, "signed out");
        let _ = self.events.send(AuthEvent::SignedOut);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeProvider {
        confirmed: bool,
        sign_outs: Mutex<u32>,
    }

    fn user() -> User {
        User {
            id: "u-1".into(),
            email: "kisan@example.in".into(),
            full_name: Some("Ravi".into()),
        }
    }

    #[async_trait]
    impl IdentityProvider for FakeProvider {
        async fn sign_in(&self, _email: &str, password: &str) -> Result<Session, AuthError> {
            if !self.confirmed {
                return Err(AuthError::EmailNotConfirmed);
            }
            if password != "secret" {
                return Err(AuthError::InvalidCredentials);
            }
            Ok(Session {
                access_token: "tok".into(),
                refresh_token: None,
                expires_in: Some(3600),
                user: user(),
            })
        }

        async fn sign_up(&self, email: &str, _password: &str, full_name: &str) -> Result<User, AuthError> {
            Ok(User {
                id: "u-2".into(),
                email: email.into(),
                full_name: Some(full_name.into()),
            })
        }

        async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
            *self.sign_outs.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn client(confirmed: bool) -> (AuthClient, Arc<FakeProvider>) {
        let provider = Arc::new(FakeProvider {
            confirmed,
            sign_outs: Mutex::new(0),
        });
        (AuthClient::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn sign_in_and_out_broadcast() {
        let (auth, provider) = client(true);
        let mut rx = auth.subscribe();

        auth.sign_in("kisan@example.in", "secret").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), AuthEvent::SignedIn { user: user() });
        assert_eq!(auth.current_user().await, Some(user()));

        auth.sign_out().await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), AuthEvent::SignedOut);
        assert!(auth.get_session().await.is_none());
        assert_eq!(*provider.sign_outs.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn failed_sign_in_keeps_no_session() {
        let (auth, _) = client(false);
        let mut rx = auth.subscribe();
        let err = auth.sign_in("kisan@example.in", "secret").await.unwrap_err();
        assert_eq!(err, AuthError::EmailNotConfirmed);
        assert!(auth.get_session().await.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn sign_out_without_session_is_noop() {
        let (auth, provider) = client(true);
        auth.sign_out().await.unwrap();
        assert_eq!(*provider.sign_outs.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn sign_up_returns_user() {
        let (auth, _) = client(true);
        let u = auth.sign_up("new@example.in", "pw", "Meena").await.unwrap();
        assert_eq!(u.full_name.as_deref(), Some("Meena"));
        assert!(auth.get_session().await.is_none());
    }
}
