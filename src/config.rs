//! Public configuration for the login screen. Nothing here is a secret.

/// Base URL of the backend that terminates both login flows
pub const AUTH_BASE_URL: &str = "http://localhost:3000";

/// OAuth client id issued by Google for this application
pub const GOOGLE_CLIENT_ID: &str =
    "309222170594-80tfthgu4i0s7iub3t9ojqgi3dctcbla.apps.googleusercontent.com";
