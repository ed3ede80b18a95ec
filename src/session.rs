use dioxus::prelude::*;
use google_auth::SessionUser;

/// Process-wide holder of the currently authenticated identity.
///
/// Provided once through Dioxus context by the app shell and consulted by
/// routing. Written exactly once per successful login, by whichever sign-in
/// path completes first; the login screen never reads it back after
/// navigating away.
#[derive(Clone, Copy)]
pub struct SessionService {
    current_user: Signal<Option<SessionUser>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_current_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.current_user.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Logout: drop the identity
    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}
