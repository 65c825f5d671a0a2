//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{sign_in, use_auth, use_sessions};

use crate::Route;

/// Login page component.
///
/// Any non-empty email signs in; the password is collected but not checked.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already logged in, go straight to the dashboard
    if auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        if !sign_in(&mut auth, &sessions, &email()) {
            error.set(Some("Please enter your email".to_string()));
            return;
        }
        nav.push(Route::Dashboard {});
    };

    rsx! {
        div {
            class: "auth-container",

            div {
                class: "card auth-card",

                h2 { "Welcome Back" }
                p { class: "subtitle", "Sign in to continue tracking IP addresses" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Your password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Sign In"
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign Up" }
                }
            }
        }
    }
}
