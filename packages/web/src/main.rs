use dioxus::prelude::*;

use ui::{ActivityLog, AuthProvider};
use views::{Dashboard, History, Login, Profile, ProtectedLayout, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ProtectedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/history")]
        History {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; see `store::config` for the keys.
const CONFIG_TOML: &str = include_str!("../iptracker.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ui::load_config(CONFIG_TOML));
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::TRACKER_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
