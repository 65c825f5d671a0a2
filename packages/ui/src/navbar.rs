use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::ActivityLogToggle;

/// Top bar of the protected pages. `children` are the navigation links.
#[component]
pub fn Navbar(children: Element, on_logout: EventHandler<()>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "IP Tracker" }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-actions",
                ActivityLogToggle {}
                LogoutButton {
                    class: "btn btn-primary",
                    on_logout: on_logout,
                }
            }
        }
    }
}
