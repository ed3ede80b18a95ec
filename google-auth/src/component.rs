use dioxus::document;
use dioxus::prelude::*;

use crate::models::{GoogleConfig, SessionUser, WidgetState};
use crate::service::AuthService;
use crate::widget::{WidgetEvent, BOOTSTRAP_JS, MOUNT_ID};

/// Fixed user-facing message for any Google sign-in failure. Diagnostic
/// detail goes to the log, never to the user.
pub const GOOGLE_SIGNIN_FAILED: &str = "Google Sign-In failed. Please try again.";

/// Props for the GoogleSignInComponent
#[derive(Props, Clone, PartialEq)]
pub struct GoogleSignInProps {
    /// Vendor configuration (public client id)
    pub config: GoogleConfig,
    /// Base URL of the backend that exchanges the ID token for a session user
    pub auth_base_url: String,
    /// Callback when the whole flow succeeds, with the authenticated user
    pub on_success: EventHandler<SessionUser>,
    /// Callback with a display message when any part of the flow fails
    #[props(default)]
    pub on_error: Option<EventHandler<String>>,
}

/// Embedded "Sign in with Google" button.
///
/// Bootstraps the vendor platform library exactly once per mount, renders the
/// vendor button into a designated element, and on a successful vendor
/// callback exchanges the ID token with the backend. Success hands the
/// resulting user to `on_success`; every failure (library missing, vendor
/// error, exchange error) is logged and reported through `on_error` with one
/// fixed message. Unmounting cancels the bridge task, so late vendor
/// callbacks can never touch torn-down state.
///
/// # Example
/// ```rust,ignore
/// GoogleSignInComponent {
///     config: GoogleConfig { client_id: "….apps.googleusercontent.com".to_string() },
///     auth_base_url: "http://localhost:3000".to_string(),
///     on_success: move |user| {
///         // Store the user and navigate away
///     },
///     on_error: move |message| {
///         // Show the message in the widget's error slot
///     },
/// }
/// ```
#[component]
pub fn GoogleSignInComponent(props: GoogleSignInProps) -> Element {
    let mut widget_state = use_signal(|| WidgetState::Uninitialized);

    let config = props.config.clone();
    let auth_base_url = props.auth_base_url.clone();
    let on_success = props.on_success;
    let on_error = props.on_error;

    use_future(move || {
        let client_id = config.client_id.clone();
        let auth_base_url = auth_base_url.clone();

        let mut report_failure = move |detail: String| {
            log::error!("Google Sign-In error: {}", detail);
            widget_state.set(WidgetState::Error(GOOGLE_SIGNIN_FAILED.to_string()));
            if let Some(handler) = on_error {
                handler.call(GOOGLE_SIGNIN_FAILED.to_string());
            }
        };

        async move {
            widget_state.set(WidgetState::Loading);

            let mut eval = document::eval(BOOTSTRAP_JS);
            if let Err(e) = eval.send(serde_json::json!({
                "clientId": client_id,
                "mountId": MOUNT_ID,
            })) {
                report_failure(format!("Failed to configure widget bridge: {:?}", e));
                return;
            }

            loop {
                match eval.recv::<WidgetEvent>().await {
                    Ok(WidgetEvent::Ready) => {
                        log::debug!("Google sign-in button rendered");
                        widget_state.set(WidgetState::Ready);
                    }
                    Ok(WidgetEvent::Token { id_token }) => {
                        let service = AuthService::new(auth_base_url.clone());
                        match service.exchange_google_token(&id_token).await {
                            Ok(user) => {
                                log::info!("Google sign-in successful");
                                widget_state.set(WidgetState::Success);
                                on_success.call(user);
                                return;
                            }
                            Err(e) => {
                                // The vendor button stays rendered, so the
                                // user can retry by clicking it again
                                report_failure(format!("Token exchange failed: {}", e));
                            }
                        }
                    }
                    Ok(WidgetEvent::Unavailable) => {
                        report_failure("Google platform library not loaded".to_string());
                        return;
                    }
                    Ok(WidgetEvent::Failure { detail }) => {
                        report_failure(detail);
                    }
                    Err(_) => {
                        // Bridge closed; nothing more will arrive
                        return;
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "google-signin",
            div { id: MOUNT_ID }
            match widget_state() {
                WidgetState::Uninitialized | WidgetState::Loading => rsx! {
                    p { class: "google-signin-hint", "Loading Google Sign-In…" }
                },
                WidgetState::Error(message) if props.on_error.is_none() => rsx! {
                    // Fallback display when no error slot was wired up
                    p { class: "error-text", "{message}" }
                },
                _ => rsx! {},
            }
        }
    }
}
