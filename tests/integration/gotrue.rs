//! GoTrue identity adapter against a mock server.

use super::mock_server::MockServerFixture;
use agri_advisor::auth::{AuthClient, AuthError, AuthEvent, GoTrueProvider};
use agri_advisor::Locale;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn client(fixture: &MockServerFixture) -> AuthClient {
    let provider = GoTrueProvider::new(&fixture.base_url, "anon-key", Duration::from_secs(5)).unwrap();
    AuthClient::new(Arc::new(provider))
}

fn session_body() -> String {
    json!({
        "access_token": "jwt-token",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-1",
        "user": {
            "id": "8f0c",
            "email": "ravi@example.in",
            "user_metadata": { "full_name": "Ravi Patil" }
        }
    })
    .to_string()
}

#[tokio::test]
async fn sign_in_stores_session_and_notifies() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("/auth/v1/token", &[("grant_type", "password")], 200, &session_body(), 1)
        .await;

    let auth = client(&fixture);
    let mut events = auth.subscribe();
    let session = auth.sign_in("ravi@example.in", "secret").await.unwrap();

    assert_eq!(session.access_token, "jwt-token");
    assert_eq!(session.user.full_name.as_deref(), Some("Ravi Patil"));
    assert_eq!(auth.current_user().await.map(|u| u.id), Some("8f0c".to_string()));
    assert!(matches!(events.recv().await.unwrap(), AuthEvent::SignedIn { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn unconfirmed_email_is_recognized() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"code": 400, "error_code": "email_not_confirmed", "msg": "Email not confirmed"});
    let _mock = fixture
        .mock_json("/auth/v1/token", &[], 400, &body.to_string(), 1)
        .await;

    let auth = client(&fixture);
    let err = auth.sign_in("new@example.in", "secret").await.unwrap_err();
    assert_eq!(err, AuthError::EmailNotConfirmed);
    assert_ne!(err.user_message(Locale::Hi), err.user_message(Locale::En));
    assert!(auth.get_session().await.is_none());
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"error": "invalid_grant", "error_description": "Invalid login credentials"});
    let _mock = fixture
        .mock_json("/auth/v1/token", &[], 400, &body.to_string(), 1)
        .await;

    let err = client(&fixture).sign_in("ravi@example.in", "wrong").await.unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn sign_up_sends_anon_key_and_returns_user() {
    let fixture = MockServerFixture::new().await;
    let body = json!({
        "id": "a1b2",
        "email": "asha@example.in",
        "user_metadata": { "full_name": "Asha Devi" },
        "confirmation_sent_at": "2024-06-01T10:00:00Z"
    });
    let mock = fixture
        .mock_json_with_header("/auth/v1/signup", ("apikey", "anon-key"), 200, &body.to_string())
        .await;

    let auth = client(&fixture);
    let user = auth.sign_up("asha@example.in", "secret", "Asha Devi").await.unwrap();
    assert_eq!(user.id, "a1b2");
    assert_eq!(user.full_name.as_deref(), Some("Asha Devi"));
    assert!(auth.get_session().await.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn sign_out_revokes_with_bearer_token() {
    let fixture = MockServerFixture::new().await;
    let _login = fixture
        .mock_json("/auth/v1/token", &[("grant_type", "password")], 200, &session_body(), 1)
        .await;
    let logout = fixture
        .mock_json_with_header("/auth/v1/logout", ("authorization", "Bearer jwt-token"), 204, "")
        .await;

    let auth = client(&fixture);
    auth.sign_in("ravi@example.in", "secret").await.unwrap();
    let mut events = auth.subscribe();
    auth.sign_out().await.unwrap();

    assert!(auth.get_session().await.is_none());
    assert!(matches!(events.recv().await.unwrap(), AuthEvent::SignedOut));
    logout.assert_async().await;
}

#[tokio::test]
async fn failed_logout_still_clears_session() {
    let fixture = MockServerFixture::new().await;
    let _login = fixture
        .mock_json("/auth/v1/token", &[], 200, &session_body(), 1)
        .await;
    let _logout = fixture
        .mock_json("/auth/v1/logout", &[], 500, r#"{"msg":"internal"}"#, 1)
        .await;

    let auth = client(&fixture);
    auth.sign_in("ravi@example.in", "secret").await.unwrap();
    let err = auth.sign_out().await.unwrap_err();
    assert!(matches!(err, AuthError::Provider { status: 500, .. }));
    assert!(auth.get_session().await.is_none());
}
