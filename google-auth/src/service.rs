use serde::Serialize;

use crate::models::{AuthResponse, Credentials, ErrorBody, SessionUser, TokenExchangeRequest};

/// Error type for authentication operations
#[derive(Debug)]
pub enum AuthError {
    /// The server rejected the credentials, with its message when one was
    /// provided in the response body
    InvalidCredentials(Option<String>),
    /// Request could not complete (connection refused, malformed response)
    NetworkUnavailable(String),
    /// Unexpected server-side failure
    ServerError { status: u16, message: Option<String> },
    /// The request hit the configured timeout
    RequestTimedOut,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials(Some(msg)) => write!(f, "Rejected: {}", msg),
            AuthError::InvalidCredentials(None) => write!(f, "Rejected by server"),
            AuthError::NetworkUnavailable(msg) => write!(f, "Network error: {}", msg),
            AuthError::ServerError {
                status,
                message: Some(msg),
            } => write!(f, "Server error {}: {}", status, msg),
            AuthError::ServerError {
                status,
                message: None,
            } => write!(f, "Server error {}", status),
            AuthError::RequestTimedOut => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// Message suitable for direct display in the login form. Server-provided
    /// messages pass through; everything else collapses to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(Some(msg))
            | AuthError::ServerError {
                message: Some(msg), ..
            } => msg.clone(),
            _ => "Login failed. Please try again.".to_string(),
        }
    }
}

/// Authentication service for the primary login and the Google token exchange
pub struct AuthService {
    base_url: String,
}

impl AuthService {
    /// Create a new authentication service for the given backend base URL
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Authenticate with email and password.
    ///
    /// Callers must have validated the credentials first; this issues exactly
    /// one request and never retries.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser, AuthError> {
        let url = self.endpoint("/auth/login");
        self.post_for_user(&url, credentials).await
    }

    /// Exchange a Google ID token for a session user
    pub async fn exchange_google_token(&self, id_token: &str) -> Result<SessionUser, AuthError> {
        let url = self.endpoint("/auth/google");
        let body = TokenExchangeRequest {
            id_token: id_token.to_string(),
        };
        self.post_for_user(&url, &body).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn client(&self) -> Result<reqwest::Client, AuthError> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("GoogleAuth/0.1.0")
            .build()
            .map_err(|e| AuthError::NetworkUnavailable(format!("Client build failed: {}", e)))
    }

    async fn post_for_user<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<SessionUser, AuthError> {
        let response = self
            .client()?
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            let body = response.json::<AuthResponse>().await.map_err(|e| {
                AuthError::NetworkUnavailable(format!("Failed to parse response: {}", e))
            })?;
            Ok(body.user)
        } else {
            // Best effort: the error body may be absent or not JSON at all
            let body = response.json::<ErrorBody>().await.ok();
            Err(classify_status(status, body))
        }
    }
}

fn classify_request_error(error: reqwest::Error) -> AuthError {
    if error.is_timeout() {
        AuthError::RequestTimedOut
    } else {
        AuthError::NetworkUnavailable(error.to_string())
    }
}

fn classify_status(status: u16, body: Option<ErrorBody>) -> AuthError {
    let message = body.and_then(|b| b.message);
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials(message),
        _ => AuthError::ServerError { status, message },
    }
}
