//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_session_store, PlatformSessions, PlatformStore};

pub const TRACKER_CSS: Asset = asset!("/assets/styling/tracker.css");

mod config;
pub use config::{load_config, use_config};

mod auth;
pub use auth::{
    normalize_email, sign_in, sign_out, use_auth, use_sessions, AuthProvider, AuthState,
    LogoutButton,
};

pub mod guard;
pub use guard::{check_access, Access};

mod tracker;
pub use tracker::{use_lookup, use_tracker, LookupRequest, TrackerProvider};

mod navbar;
pub use navbar::Navbar;

mod map;
pub use map::{map_embed_url, IpMap};

mod ip_card;
pub use ip_card::IpCard;

mod history_list;
pub use history_list::HistoryList;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
