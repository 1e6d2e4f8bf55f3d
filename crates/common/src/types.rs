//! Wire and session types for the loginwall demo
//!
//! Field names on the wire are camelCase (`userName`) to stay
//! byte-compatible with the original API and with any client reading
//! the persisted session keys.

use serde::{Deserialize, Serialize};

/// Storage key holding the logged-in flag.
pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";

/// Storage key holding the serialized [`PublicUser`].
pub const KEY_USER: &str = "user";

/// The only value of [`KEY_IS_LOGGED_IN`] that counts as logged in.
pub const LOGGED_IN_SENTINEL: &str = "true";

/// Message returned on a successful login.
pub const MSG_LOGIN_OK: &str = "Login successful!";

/// Message returned when no roster entry matches. Fixed text so the
/// response does not reveal whether the username or the password was
/// wrong.
pub const MSG_BAD_CREDENTIALS: &str = "Username or password is incorrect!";

/// Generic client-side fallback when the server cannot be reached or
/// answers with something unparseable. Internal failure detail is
/// never surfaced to the end user.
pub const MSG_LOGIN_FAILED_GENERIC: &str = "An error occurred during login!";

/// One authenticatable identity. Statically defined at process start,
/// immutable for the process lifetime.
///
/// The password is stored in plaintext. That is a deliberate
/// reproduction of the demo this app models, not a pattern for real
/// systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_name: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// The subset of this record that may leave the server.
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            user_name: self.user_name.clone(),
        }
    }
}

/// The non-secret subset of a [`UserRecord`] returned to clients and
/// persisted in the session store. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub user_name: String,
}

impl PublicUser {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}

/// Body of `POST /api/login`. Credentials travel here and nowhere
/// else: never in the URL, query string, or headers.
///
/// Absent or empty strings are passed through to the roster lookup
/// unvalidated; they simply fail to match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
}

/// Body of the `/api/login` response, for both verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
}

impl LoginResponse {
    pub fn ok(user: PublicUser) -> Self {
        Self {
            success: true,
            message: MSG_LOGIN_OK.to_string(),
            user: Some(user),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: MSG_BAD_CREDENTIALS.to_string(),
            user: None,
        }
    }
}
