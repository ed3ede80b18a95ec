//! # Google Auth
//!
//! A reusable Google Identity sign-in library with Dioxus UI components.
//!
//! This crate provides:
//! - Email/password login against a backend auth endpoint
//! - Google ID token exchange against the backend
//! - A Dioxus component embedding the vendor sign-in button
//! - A typed error taxonomy with user-facing messages
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on authentication. It does **not**:
//! - Store the authenticated user (handled by the application's session store)
//! - Perform navigation (handled by the application)
//! - Persist anything across restarts
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use google_auth::{AuthService, Credentials, GoogleSignInComponent};
//!
//! // Programmatic usage
//! let service = AuthService::new("http://localhost:3000".to_string());
//! let user = service.login(&credentials).await?;
//!
//! // UI component usage
//! GoogleSignInComponent {
//!     config: GoogleConfig { client_id: client_id.to_string() },
//!     auth_base_url: "http://localhost:3000".to_string(),
//!     on_success: move |user| {
//!         // Store the user and navigate
//!     },
//!     on_error: move |message| {
//!         // Show the message
//!     },
//! }
//! ```

pub mod component;
pub mod models;
pub mod service;
pub mod widget;

pub use component::{GoogleSignInComponent, GoogleSignInProps, GOOGLE_SIGNIN_FAILED};
pub use models::{
    AuthResponse, Credentials, ErrorBody, GoogleConfig, SessionUser, SubmissionState,
    TokenExchangeRequest, ValidationErrors, WidgetState,
};
pub use service::{AuthError, AuthService};
pub use widget::{WidgetEvent, MOUNT_ID};
