//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{sign_in, use_auth, use_sessions};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    if auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        if !sign_in(&mut auth, &sessions, &email()) {
            error.set(Some("Email is required".to_string()));
            return;
        }
        nav.push(Route::Dashboard {});
    };

    rsx! {
        div {
            class: "auth-container",

            div {
                class: "card auth-card",

                h2 { "Create an Account" }
                p { class: "subtitle", "Sign up to start tracking IP addresses" }

                form {
                    class: "auth-form",
                    onsubmit: handle_signup,

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
                            placeholder: "Create a password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Sign Up"
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign In" }
                }
            }
        }
    }
}
