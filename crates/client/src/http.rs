//! Login HTTP client
//!
//! Posts credentials to `/api/login` and folds every way the call can
//! go wrong into a small outcome taxonomy. Only the server's own
//! rejection message is surfaced verbatim; transport and parse
//! failures normalize to one generic user-facing string so internal
//! detail never reaches the UI.

use std::time::Duration;

use tracing::{debug, warn};

use loginwall_common::{LoginRequest, LoginResponse, PublicUser, MSG_LOGIN_FAILED_GENERIC};

/// Outcome of one login attempt, from the UI's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Server accepted the credentials.
    Success(PublicUser),
    /// Server answered 401 with its fixed rejection message.
    InvalidCredentials(String),
    /// The server could not be reached, or the request timed out.
    TransportError,
    /// The server answered, but not with a body this client understands.
    MalformedResponse,
}

impl LoginOutcome {
    /// Text to show the user for a non-success outcome.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success(_) => None,
            LoginOutcome::InvalidCredentials(message) => Some(message),
            LoginOutcome::TransportError | LoginOutcome::MalformedResponse => {
                Some(MSG_LOGIN_FAILED_GENERIC)
            }
        }
    }
}

/// HTTP client for the login API.
pub struct LoginClient {
    base_url: String,
    client: reqwest::Client,
}

impl LoginClient {
    /// Build a client for a server at `base_url`, e.g.
    /// `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    /// Same as [`LoginClient::new`] with a caller-supplied request
    /// timeout. Expiry is reported as a transport failure.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Submit a credential pair. Never panics and never errors; every
    /// failure mode is an outcome variant.
    pub async fn login(&self, user_name: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest {
            user_name: user_name.to_string(),
            password: password.to_string(),
        };

        let response = match self
            .client
            .post(format!("{}/api/login", self.base_url))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("login request failed: {}", e);
                return LoginOutcome::TransportError;
            }
        };

        let status = response.status();
        let body = match response.json::<LoginResponse>().await {
            Ok(body) => body,
            Err(e) => {
                warn!("login response unparseable (status {}): {}", status, e);
                return LoginOutcome::MalformedResponse;
            }
        };

        debug!("login verdict: success={} ({})", body.success, status);

        match body {
            LoginResponse {
                success: true,
                user: Some(user),
                ..
            } => LoginOutcome::Success(user),
            LoginResponse {
                success: false,
                message,
                ..
            } => LoginOutcome::InvalidCredentials(message),
            // success:true without a user record is not a shape this
            // client accepts.
            _ => LoginOutcome::MalformedResponse,
        }
    }
}
