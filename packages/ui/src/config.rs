//! Client configuration context.

use dioxus::prelude::*;
use store::TrackerConfig;

/// Parse an embedded `iptracker.toml`, falling back to defaults on error.
pub fn load_config(toml_text: &str) -> TrackerConfig {
    match TrackerConfig::from_toml(toml_text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {}",
                TrackerConfig::filename(),
                e
            );
            TrackerConfig::default()
        }
    }
}

/// Get the configuration provided by the app root.
pub fn use_config() -> TrackerConfig {
    use_context::<TrackerConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_falls_back() {
        assert_eq!(load_config("zoom = = 3"), TrackerConfig::default());
        assert_eq!(load_config("[map]\nzoom = 3").map.zoom, 3);
    }
}
