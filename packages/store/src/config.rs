//! # Client configuration — `iptracker.toml`
//!
//! Defines the TOML file the web client embeds at build time (filename:
//! [`TrackerConfig::filename`] = `"iptracker.toml"`). It names the
//! geolocation provider and tunes the map view.
//!
//! ## Structure
//!
//! ```toml
//! [provider]
//! base_url = "https://ipwhois.app/json/"   # self lookup hits base_url as-is
//!
//! [map]
//! zoom = 10
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`TrackerConfig`] | Top-level config. Builder helpers (`new`, `with_zoom`), TOML (de)serialisation, filename constant. |
//! | [`ProviderConfig`] | Geolocation provider endpoint. Explicit lookups append the address to `base_url`. |
//! | [`MapConfig`] | Zoom level for the embedded map, default **10**. |
//!
//! All structs implement `Default`, so a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `iptracker.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Geolocation provider configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint for self lookups. Must end with `/`; the address is appended
    /// for explicit lookups.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://ipwhois.app/json/".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Map configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_zoom() -> u8 {
    10
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
        }
    }
}

impl TrackerConfig {
    /// Create a config pointing at the given provider.
    pub fn new(base_url: String) -> Self {
        Self {
            provider: ProviderConfig { base_url },
            map: MapConfig::default(),
        }
    }

    /// Builder method to set the map zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.map.zoom = zoom;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "iptracker.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
