use thiserror::Error;

/// Failures raised by an interactive sign-in or sign-out exchange.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("sign-in was cancelled")]
    Cancelled,
    #[error("sign-in popup was blocked by the browser")]
    PopupBlocked,
    #[error("network error: {0}")]
    Network(String),
    #[error("identity provider is misconfigured: {0}")]
    Misconfigured(String),
    #[error("a sign-in exchange is already in progress")]
    ExchangeInFlight,
    #[error("auth provider is no longer mounted")]
    Detached,
    #[error("identity provider returned an invalid user: {0}")]
    InvalidUser(String),
    #[error("identity provider error ({code}): {message}")]
    Provider { code: String, message: String },
}

impl AuthError {
    /// Classifies a Firebase Auth error code (`auth/...`) into an `AuthError`.
    pub fn from_provider_code(code: &str, message: &str) -> Self {
        match code {
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" | "auth/user-cancelled" => {
                Self::Cancelled
            }
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/network-request-failed" | "auth/timeout" => Self::Network(message.to_string()),
            "auth/operation-not-allowed"
            | "auth/invalid-api-key"
            | "auth/unauthorized-domain"
            | "auth/configuration-not-found"
            | "auth/auth-domain-config-required"
            | "auth/app-not-authorized"
            | "auth/argument-error" => Self::Misconfigured(format!("{code}: {message}")),
            _ => Self::Provider {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// True when the user backed out of the exchange on purpose.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A view outside `AuthProvider` tried to read the auth context.
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
#[error("use_auth must be used within an AuthProvider")]
pub struct ContextMisuseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_dismissal_codes_are_cancellations() {
        for code in [
            "auth/popup-closed-by-user",
            "auth/cancelled-popup-request",
            "auth/user-cancelled",
        ] {
            let err = AuthError::from_provider_code(code, "closed");
            assert_eq!(err, AuthError::Cancelled, "{code}");
            assert!(err.is_cancellation());
        }
    }

    #[test]
    fn blocked_and_network_codes_are_classified() {
        assert_eq!(
            AuthError::from_provider_code("auth/popup-blocked", "blocked"),
            AuthError::PopupBlocked
        );
        assert_eq!(
            AuthError::from_provider_code("auth/network-request-failed", "offline"),
            AuthError::Network("offline".to_string())
        );
    }

    #[test]
    fn configuration_codes_keep_the_code_in_the_message() {
        let err = AuthError::from_provider_code("auth/unauthorized-domain", "add localhost");
        assert_eq!(
            err,
            AuthError::Misconfigured("auth/unauthorized-domain: add localhost".to_string())
        );
        assert!(!err.is_cancellation());
    }

    #[test]
    fn unknown_codes_fall_through_to_provider() {
        let err = AuthError::from_provider_code("auth/user-disabled", "disabled");
        assert_eq!(
            err.to_string(),
            "identity provider error (auth/user-disabled): disabled"
        );
    }

    #[test]
    fn context_misuse_message_names_the_provider() {
        assert_eq!(
            ContextMisuseError.to_string(),
            "use_auth must be used within an AuthProvider"
        );
    }
}
