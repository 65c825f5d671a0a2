use dioxus::prelude::*;
use ui::icons::FaRightFromBracket;
use ui::{sign_out, use_auth, use_sessions, Icon};

use crate::Route;

/// Account details for the logged-in user.
#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let nav = use_navigator();
    let email = auth().email().unwrap_or("N/A").to_string();

    let handle_logout = move |_| {
        sign_out(&mut auth, &sessions);
        nav.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "card profile-card",
            p { strong { "Email: " } "{email}" }
            p { strong { "Status: " } "Logged In" }
            button {
                class: "btn btn-danger with-icon",
                onclick: handle_logout,
                Icon { icon: FaRightFromBracket, width: 18, height: 18 }
                "Logout"
            }
        }
    }
}
