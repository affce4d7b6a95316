//! Identity records and provider kinds shared by the bridge, the controller
//! and the login view. `User` mirrors the public profile the SDK exposes and
//! carries no token material.

use crate::app_lib::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed-in identity as reported by the provider SDK.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl User {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            photo_url: None,
        }
    }

    /// Parses the JSON form of an SDK user (`user.toJSON()`).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUser` when the payload is not an object with a
    /// non-empty `uid`.
    pub fn from_sdk_json(json: &str) -> Result<Self, AuthError> {
        let user: Self =
            serde_json::from_str(json).map_err(|err| AuthError::InvalidUser(err.to_string()))?;
        if user.uid.trim().is_empty() {
            return Err(AuthError::InvalidUser("empty uid".to_string()));
        }
        Ok(user)
    }

    /// Best human-readable label: display name, then email, then uid.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref().filter(|email| !email.trim().is_empty()))
            .unwrap_or(self.uid.as_str())
    }
}

/// OAuth providers offered on the login view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Google,
    Github,
    Apple,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [Self::Github, Self::Google, Self::Apple];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Apple => "apple",
        }
    }

    /// Provider id understood by the SDK's provider constructors.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::Github => "github.com",
            Self::Apple => "apple.com",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Google => "Continue with Google",
            Self::Github => "Continue with GitHub",
            Self::Apple => "Continue with Apple",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
