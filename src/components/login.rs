use crate::{config, session::SessionService, Screen};
use dioxus::prelude::*;
use google_auth::{
    AuthService, Credentials, GoogleConfig, GoogleSignInComponent, SubmissionState,
    ValidationErrors,
};

#[component]
pub fn LoginScreen(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_context::<SessionService>();

    // Already authenticated (e.g. back-navigation after login): skip the form
    if session.is_logged_in() {
        on_navigate.call(Screen::Home);
    }

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::default);
    let mut submission = use_signal(|| SubmissionState::Idle);
    // Google sign-in failures get their own slot, independent of the form's
    // errors; both render at once when both are set
    let mut google_error = use_signal(|| None::<String>);

    let mut handle_submit = move || {
        // The button is disabled while pending; this guard backs it up so a
        // second submit can never issue a second request
        if submission().is_pending() {
            return;
        }

        let credentials = Credentials {
            email: email(),
            password: password(),
        };

        let found = credentials.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(ValidationErrors::default());
        submission.set(SubmissionState::Pending);

        let mut session = session;
        spawn(async move {
            let service = AuthService::new(config::AUTH_BASE_URL.to_string());
            match service.login(&credentials).await {
                Ok(user) => {
                    submission.set(SubmissionState::Succeeded);
                    // Store the identity before navigating, so the destination
                    // screen never reads a stale session
                    session.set_current_user(user);
                    on_navigate.call(Screen::Home);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    submission.set(SubmissionState::Failed);
                    errors.set(ValidationErrors::submit_only(e.user_message()));
                }
            }
        });
    };

    let pending = submission().is_pending();
    let current_errors = errors();

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f5f5f5; padding: 16px;",
            div { class: "card", style: "max-width: 420px; width: 100%;",

                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0 0 24px 0; text-align: center;",
                    "Sign in to your account"
                }

                div { style: "margin-bottom: 16px;",
                    label { class: "form-label", "Email address" }
                    input {
                        class: "form-input",
                        r#type: "email",
                        value: "{email}",
                        disabled: pending,
                        oninput: move |e| email.set(e.value()),
                    }
                    if let Some(message) = current_errors.email.clone() {
                        p { class: "error-text", "{message}" }
                    }
                }

                div { style: "margin-bottom: 16px;",
                    label { class: "form-label", "Password" }
                    input {
                        class: "form-input",
                        r#type: "password",
                        value: "{password}",
                        disabled: pending,
                        oninput: move |e| password.set(e.value()),
                    }
                    if let Some(message) = current_errors.password.clone() {
                        p { class: "error-text", "{message}" }
                    }
                }

                if let Some(message) = current_errors.submit.clone() {
                    div { class: "error-banner", "⚠️ {message}" }
                }

                if let Some(message) = google_error() {
                    div { class: "error-banner", "⚠️ {message}" }
                }

                button {
                    class: "btn-primary",
                    style: "width: 100%;",
                    disabled: pending,
                    onclick: move |_| handle_submit(),
                    if pending { "Signing in…" } else { "Sign in" }
                }

                div { style: "margin-top: 16px; display: flex; justify-content: center;",
                    GoogleSignInComponent {
                        config: GoogleConfig {
                            client_id: config::GOOGLE_CLIENT_ID.to_string(),
                        },
                        auth_base_url: config::AUTH_BASE_URL.to_string(),
                        on_success: move |user| {
                            // Same success path as the form: store, then navigate
                            let mut session = session;
                            session.set_current_user(user);
                            on_navigate.call(Screen::Home);
                        },
                        on_error: move |message| google_error.set(Some(message)),
                    }
                }
            }
        }
    }
}
