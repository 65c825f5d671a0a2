use dioxus::prelude::*;
use ui::{use_tracker, HistoryList};

#[component]
pub fn History() -> Element {
    let tracker = use_tracker();
    let history = tracker().history().clone();

    rsx! {
        HistoryList { history }
    }
}
