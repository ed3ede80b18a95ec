use serde::Deserialize;

/// Id of the element the vendor button renders into
pub const MOUNT_ID: &str = "google-signin-btn";

/// Bootstrap script for the Google platform library.
///
/// Reads `{ clientId, mountId }` from the Rust side, then drives the vendor
/// lifecycle: `gapi.load("auth2")`, `auth2.init`, `signin2.render`. Every
/// outcome is reported back as a tagged event; in particular a missing
/// `window.gapi` becomes an `unavailable` event instead of a thrown
/// null-reference. The vendor button's internal click and consent flow stays
/// opaque to this code.
pub const BOOTSTRAP_JS: &str = r#"
    const cfg = await dioxus.recv();
    if (!window.gapi) {
        dioxus.send({ kind: "unavailable" });
        return;
    }
    window.gapi.load("auth2", () => {
        try {
            window.gapi.auth2.init({ client_id: cfg.clientId });
            window.gapi.signin2.render(cfg.mountId, {
                scope: "profile email",
                longtitle: true,
                theme: "dark",
                onsuccess: (googleUser) => {
                    const auth = googleUser.getAuthResponse();
                    dioxus.send({ kind: "token", idToken: auth.id_token });
                },
                onfailure: (error) => {
                    dioxus.send({
                        kind: "failure",
                        detail: String((error && error.error) || error),
                    });
                },
            });
            dioxus.send({ kind: "ready" });
        } catch (e) {
            dioxus.send({ kind: "failure", detail: String(e) });
        }
    });
"#;

/// Event reported by the bootstrap script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WidgetEvent {
    /// `window.gapi` is not present on the host page
    Unavailable,
    /// The vendor button is rendered and clickable
    Ready,
    /// The user completed the vendor flow; the token still needs a
    /// server-side exchange
    Token {
        #[serde(rename = "idToken")]
        id_token: String,
    },
    /// Vendor-reported failure with diagnostic detail
    Failure { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_unavailable() {
        let event: WidgetEvent = serde_json::from_str(r#"{"kind":"unavailable"}"#).unwrap();
        assert_eq!(event, WidgetEvent::Unavailable);
    }

    #[test]
    fn test_event_ready() {
        let event: WidgetEvent = serde_json::from_str(r#"{"kind":"ready"}"#).unwrap();
        assert_eq!(event, WidgetEvent::Ready);
    }

    #[test]
    fn test_event_token() {
        let event: WidgetEvent =
            serde_json::from_str(r#"{"kind":"token","idToken":"abc"}"#).unwrap();
        assert_eq!(
            event,
            WidgetEvent::Token {
                id_token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_event_failure_detail() {
        let event: WidgetEvent =
            serde_json::from_str(r#"{"kind":"failure","detail":"popup_closed_by_user"}"#).unwrap();
        assert_eq!(
            event,
            WidgetEvent::Failure {
                detail: "popup_closed_by_user".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<WidgetEvent>(r#"{"kind":"profile"}"#).is_err());
    }
}
