use crate::{session::SessionService, Screen};
use dioxus::prelude::*;

/// Landing screen after a successful sign-in
#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_context::<SessionService>();

    let greeting = match session.current_user() {
        Some(user) => format!("Welcome, {}!", user.name),
        None => "Welcome!".to_string(),
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            div { class: "card",
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0 0 16px 0;",
                    "{greeting}"
                }
                p { style: "margin: 0 0 16px 0; color: #555;",
                    "You are signed in."
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| {
                        let mut session = session;
                        session.clear();
                        on_navigate.call(Screen::Login);
                    },
                    "Sign out"
                }
            }
        }
    }
}
