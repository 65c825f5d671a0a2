use dioxus::prelude::*;

use crate::activity_log::{LogLevel, use_activity_log};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

const FILTERS: [(Option<LogLevel>, &str); 3] = [
    (None, "All"),
    (Some(LogLevel::Success), "Tracked"),
    (Some(LogLevel::Error), "Failed"),
];

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// Floating panel of lookup and session events, newest first, narrowed to
/// tracked or failed lookups on demand.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let snapshot = log();
    let active = snapshot.filter;
    let entries: Vec<_> = snapshot.visible_entries().into_iter().cloned().collect();
    let filters = FILTERS.map(|(level, label)| match level {
        Some(level) => (Some(level), format!("{label} ({})", snapshot.count(level))),
        None => (None, label.to_string()),
    });

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Lookup log" }
                nav {
                    class: "activity-log-filters",
                    for (level, label) in filters {
                        button {
                            class: if level == active { "active" } else { "" },
                            onclick: move |_| log.write().filter = level,
                            "{label}"
                        }
                    }
                }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if entries.is_empty() {
                    li { class: "activity-log-empty", "Nothing to show." }
                }
                for entry in entries {
                    li {
                        class: level_class(entry.level),
                        time { class: "activity-log-time", "{entry.timestamp}" }
                        " {entry.message}"
                    }
                }
            }
        }
    }
}

/// Navbar button that shows or hides the lookup log. Shows the number of
/// failed lookups when there are any.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log().error_count();

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Lookup log",
            if errors > 0 {
                "{errors}"
            } else {
                "Log"
            }
        }
    }
}
