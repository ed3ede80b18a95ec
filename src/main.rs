use dioxus::prelude::*;

mod components;
mod config;
mod session;

use components::{HomeScreen, LoginScreen};
use session::SessionService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Login,
    Home,
}

#[component]
fn App() -> Element {
    use_context_provider(SessionService::new);
    let mut current_screen = use_signal(|| Screen::Login);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match current_screen() {
            Screen::Login => rsx! {
                LoginScreen { on_navigate: move |s| current_screen.set(s) }
            },
            Screen::Home => rsx! {
                HomeScreen { on_navigate: move |s| current_screen.set(s) }
            },
        }
    }
}
