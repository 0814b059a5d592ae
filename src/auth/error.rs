use crate::localization::Locale;
use thiserror::Error;

/// Identity provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Sign-in refused until the user follows the confirmation email.
    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Identity provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Identity transport error: {0}")]
    Transport(String),
}

impl AuthError {
    /// Text to show the user. Email confirmation gets localized guidance;
    /// other provider errors surface their own message.
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            AuthError::EmailNotConfirmed => locale.localize("emailNotConfirmed").to_string(),
            AuthError::InvalidCredentials => self.to_string(),
            AuthError::Provider { message, .. } => message.clone(),
            AuthError::Transport(_) => locale.localize("signInFailed").to_string(),
        }
    }

    /// Map a provider message onto the dedicated variants where one exists.
    pub fn from_provider_message(status: u16, code: Option<&str>, message: &str) -> Self {
        let lowered = message.to_ascii_lowercase();
        match code {
            Some("email_not_confirmed") => AuthError::EmailNotConfirmed,
            Some("invalid_credentials") => AuthError::InvalidCredentials,
            _ if lowered.contains("email not confirmed") => AuthError::EmailNotConfirmed,
            _ if lowered.contains("invalid login credentials") => AuthError::InvalidCredentials,
            _ => AuthError::Provider {
                status,
                message: message.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfirmed_email_is_distinct() {
        assert_eq!(
            AuthError::from_provider_message(400, None, "Email not confirmed"),
            AuthError::EmailNotConfirmed
        );
        assert_eq!(
            AuthError::from_provider_message(400, Some("email_not_confirmed"), "whatever"),
            AuthError::EmailNotConfirmed
        );
        assert!(matches!(
            AuthError::from_provider_message(422, None, "Password should be at least 6 characters"),
            AuthError::Provider { status: 422, .. }
        ));
    }

    #[test]
    fn user_message_is_localized_for_confirmation() {
        let hi = AuthError::EmailNotConfirmed.user_message(Locale::Hi);
        assert!(hi.starts_with("साइन इन करने से पहले"));
        let en = AuthError::EmailNotConfirmed.user_message(Locale::En);
        assert!(en.contains("confirmation link"));
    }

    #[test]
    fn provider_message_passes_through() {
        let err = AuthError::Provider {
            status: 422,
            message: "User already registered".into(),
        };
        assert_eq!(err.user_message(Locale::Gu), "User already registered");
    }
}
