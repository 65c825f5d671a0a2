use dioxus::prelude::*;
use ui::icons::FaGlobe;
use ui::{use_config, use_lookup, use_tracker, Icon, IpCard};

/// Lookup form plus the most recent result.
#[component]
pub fn Dashboard() -> Element {
    let tracker = use_tracker();
    let lookups = use_lookup();
    let zoom = use_config().map.zoom;
    let mut input = use_signal(String::new);

    let handle_track = move |evt: FormEvent| {
        evt.prevent_default();
        let ip = input().trim().to_string();
        if ip.is_empty() {
            return;
        }
        lookups.send(Some(ip));
        input.set(String::new());
    };

    let current = tracker().current().cloned();

    rsx! {
        div {
            class: "dashboard",

            form {
                class: "track-form",
                onsubmit: handle_track,
                span { class: "icon", Icon { icon: FaGlobe, width: 24, height: 24 } }
                input {
                    value: input(),
                    placeholder: "Enter IP address",
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Track"
                }
            }

            if let Some(info) = current {
                IpCard { info, zoom }
            }
        }
    }
}
