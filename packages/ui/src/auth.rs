//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::SessionRecord;

use crate::platform::{make_session_store, PlatformSessions};

/// Who is logged in, as last read from or written to the session store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionRecord>,
}

impl AuthState {
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session store shared by the app.
pub fn use_sessions() -> PlatformSessions {
    use_context::<PlatformSessions>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable login state.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let sessions = use_context_provider(make_session_store);
    let auth_state = use_signal(|| AuthState {
        user: sessions.get_session(),
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Trim a submitted email; `None` if nothing is left.
pub fn normalize_email(input: &str) -> Option<String> {
    let email = input.trim();
    (!email.is_empty()).then(|| email.to_string())
}

/// Start a session for `email` and publish it to the auth signal.
///
/// Any non-empty email is accepted. Returns `false` if the email is blank.
pub fn sign_in(auth: &mut Signal<AuthState>, sessions: &PlatformSessions, email: &str) -> bool {
    let Some(email) = normalize_email(email) else {
        return false;
    };
    sessions.set_session(&email);
    tracing::info!("Session started for {}", email);
    auth.set(AuthState {
        user: Some(SessionRecord::new(email)),
    });
    true
}

/// End the session and publish the logged-out state.
pub fn sign_out(auth: &mut Signal<AuthState>, sessions: &PlatformSessions) {
    sessions.clear_session();
    tracing::info!("Session cleared");
    auth.set(AuthState::default());
}

/// Button to log out the current user.
///
/// `on_logout` runs after the session is cleared; the router uses it to
/// leave the protected page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let sessions = use_sessions();

    let onclick = move |_| {
        sign_out(&mut auth_state, &sessions);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
