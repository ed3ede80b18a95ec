use serde::{Deserialize, Serialize};

/// Login form contents, sent as the payload of the primary login request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate the form contents. Pure and deterministic; the result replaces
    /// any previous [`ValidationErrors`] wholesale.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.email.is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !looks_like_email(&self.email) {
            errors.email = Some("Invalid email format".to_string());
        }

        if self.password.is_empty() {
            errors.password = Some("Password is required".to_string());
        }

        errors
    }
}

/// Deliberately permissive email check, equivalent to the unanchored
/// `\S+@\S+\.\S+` pattern: some whitespace-free run must contain an `@` with
/// at least one character before it, and a later `.` with characters on both
/// sides. The surrounding characters may themselves be `@` or `.`, so every
/// `@` occurrence is a candidate split point. Not RFC 5322 and not meant to
/// be.
fn looks_like_email(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        token.match_indices('@').any(|(at, _)| {
            at > 0
                && token
                    .match_indices('.')
                    .any(|(dot, _)| dot >= at + 2 && dot + 1 < token.len())
        })
    })
}

/// Per-field error messages for the login form.
///
/// Recomputed wholesale on every submit attempt and cleared by replacement,
/// never merged. A failed submission lands in `submit`; the Google widget has
/// its own slot outside this struct and is never touched here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub submit: Option<String>,
}

impl ValidationErrors {
    /// No field has an error. Submission must only proceed when this is true.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.submit.is_none()
    }

    /// Errors with only the submit slot set, used when the server rejects an
    /// otherwise valid form.
    pub fn submit_only(message: String) -> Self {
        Self {
            submit: Some(message),
            ..Self::default()
        }
    }
}

/// State of the primary form submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// A request is in flight; the submit trigger must stay disabled.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

/// Authenticated identity returned by the auth service.
///
/// Handed to the session store on success; this crate never retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Successful response body from either auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: SessionUser,
}

/// Request body for the Google token exchange endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeRequest {
    pub id_token: String,
}

/// Error response body; the message field is optional on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Vendor configuration for the Google sign-in widget. The client id is
/// issued by Google and is public configuration, not a secret.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleConfig {
    pub client_id: String,
}

/// State of the embedded Google sign-in widget
///
/// `Uninitialized -> Loading -> Ready -> (Success | Error)`. The widget is
/// bootstrapped once per component lifetime; recovery from `Error` requires a
/// remount.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState {
    Uninitialized,
    Loading,
    Ready,
    Success,
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_empty_email() {
        let errors = creds("", "secret").validate();
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_validate_email_format() {
        for bad in ["plainaddress", "@b.com", "a@b", "a@.", "a b.com", "a@b."] {
            let errors = creds(bad, "secret").validate();
            assert_eq!(
                errors.email.as_deref(),
                Some("Invalid email format"),
                "expected format error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_permissive_pattern_is_unanchored() {
        // The pattern only needs to match somewhere, as in the classic
        // \S+@\S+\.\S+ check.
        assert!(creds("hello a@b.com world", "x").validate().email.is_none());
        assert!(creds("a@b.co.uk", "x").validate().email.is_none());
        // A leading @ folds into the first \S+, so any later @ can split the
        // match (Mastodon-style paste)
        assert!(creds("@alice@example.com", "x").validate().email.is_none());
        assert!(creds("x@@b.cd", "x").validate().email.is_none());
    }

    #[test]
    fn test_validate_empty_password() {
        let errors = creds("a@b.com", "").validate();
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_validate_nonempty_password_has_no_password_error() {
        let errors = creds("", "anything").validate();
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_validate_ok() {
        let errors = creds("a@b.com", "x").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_submit_only_replaces_field_errors() {
        let errors = ValidationErrors::submit_only("bad credentials".to_string());
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
        assert_eq!(errors.submit.as_deref(), Some("bad credentials"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_submission_state_pending_guard() {
        assert!(SubmissionState::Pending.is_pending());
        assert!(!SubmissionState::Idle.is_pending());
        assert!(!SubmissionState::Failed.is_pending());
    }

    #[test]
    fn test_auth_response_deserialize() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"user":{"id":1,"name":"A"}}"#).unwrap();
        assert_eq!(response.user.id, 1);
        assert_eq!(response.user.name, "A");
        assert_eq!(response.user.email, None);
    }

    #[test]
    fn test_token_exchange_serializes_camel_case() {
        let body = TokenExchangeRequest {
            id_token: "tok".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"idToken":"tok"}"#
        );
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"code":500}"#).unwrap();
        assert!(body.message.is_none());
    }
}
