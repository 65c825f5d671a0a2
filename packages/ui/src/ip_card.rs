use api::{IpInfo, IpKind};
use dioxus::prelude::*;

use crate::icons::{FaLocationDot, FaServer};
use crate::map::IpMap;
use crate::Icon;

/// Details of one lookup, with a map for public addresses.
#[component]
pub fn IpCard(info: IpInfo, zoom: u8) -> Element {
    let badge = match info.kind() {
        IpKind::Private => "badge badge-private",
        IpKind::Public => "badge badge-public",
    };
    let city = info.city.clone().unwrap_or_default();
    let region = info.region.clone().unwrap_or_default();
    let country = info.country.clone().unwrap_or_default();
    let isp = info.isp.clone().unwrap_or_default();

    rsx! {
        div {
            class: "card ip-card",
            p { strong { "IP: " } "{info.ip()}" }
            p {
                strong { "Type: " }
                span { class: "{badge}", "{info.kind()}" }
            }
            p {
                class: "with-icon",
                Icon { icon: FaLocationDot, width: 16, height: 16 }
                " {city}, {region}"
            }
            p {
                class: "with-icon",
                Icon { icon: FaServer, width: 16, height: 16 }
                " {country}"
            }
            p { strong { "ISP: " } "{isp}" }

            if let Some((latitude, longitude)) = info.map_position() {
                IpMap {
                    latitude,
                    longitude,
                    zoom,
                    label: info.location_line(),
                }
            } else {
                p { class: "map-unavailable", "Cannot display map for private IP." }
            }
        }
    }
}
