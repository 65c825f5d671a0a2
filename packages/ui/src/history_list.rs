use api::History;
use dioxus::prelude::*;

/// Every lookup so far, newest first.
#[component]
pub fn HistoryList(history: History) -> Element {
    if history.is_empty() {
        return rsx! {
            p { class: "muted", "No history yet." }
        };
    }

    rsx! {
        div {
            class: "history-list",
            for (i, entry) in history.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "card history-entry",
                    "{entry.ip()} — {entry.kind()}"
                    br {}
                    span { class: "muted small", "{entry.location_line()}" }
                }
            }
        }
    }
}
