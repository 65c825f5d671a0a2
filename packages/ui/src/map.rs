//! Embedded OpenStreetMap view for a coordinate pair.

use dioxus::prelude::*;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// Build an OpenStreetMap embed URL centred on (`latitude`, `longitude`) with
/// a marker. The visible box is `360 / 2^zoom` degrees wide, like a slippy
/// map tile at that zoom.
pub fn map_embed_url(latitude: f64, longitude: f64, zoom: u8) -> String {
    let half = 180.0 / 2f64.powi(i32::from(zoom.min(19)));
    let west = (longitude - half).max(-180.0);
    let east = (longitude + half).min(180.0);
    let south = (latitude - half).max(-90.0);
    let north = (latitude + half).min(90.0);

    format!(
        "{EMBED_BASE}?bbox={west:.4},{south:.4},{east:.4},{north:.4}&layer=mapnik&marker={latitude:.4},{longitude:.4}"
    )
}

#[component]
pub fn IpMap(latitude: f64, longitude: f64, zoom: u8, label: String) -> Element {
    let src = map_embed_url(latitude, longitude, zoom);

    rsx! {
        iframe {
            class: "ip-map",
            title: "{label}",
            src: "{src}",
            "loading": "lazy",
        }
    }
}
