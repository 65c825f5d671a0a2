//! Layout shared by every page that needs a session.

use dioxus::prelude::*;
use ui::icons::{FaClock, FaHouse, FaUser};
use ui::{check_access, use_sessions, Access, ActivityLogPanel, Icon, Navbar, TrackerProvider};

use crate::Route;

/// Guards its child routes and hosts the tracker state they share.
///
/// Access is checked once on mount. Logged-out visitors get the current
/// history entry replaced with `/login`, so Back does not return here.
#[component]
pub fn ProtectedLayout() -> Element {
    let sessions = use_sessions();
    let access = use_hook(|| check_access(&sessions));
    let nav = use_navigator();

    if access == Access::RedirectToLogin {
        tracing::info!("No session, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Link {
                to: Route::Dashboard {},
                active_class: "active",
                Icon { icon: FaHouse, width: 16, height: 16 }
                "Dashboard"
            }
            Link {
                to: Route::History {},
                active_class: "active",
                Icon { icon: FaClock, width: 16, height: 16 }
                "History"
            }
            Link {
                to: Route::Profile {},
                active_class: "active",
                Icon { icon: FaUser, width: 16, height: 16 }
                "Profile"
            }
        }

        TrackerProvider {
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }

        ActivityLogPanel {}
    }
}
