//! # Geolocation result model
//!
//! [`IpInfo`] is the normalised shape of one successful lookup, independent of
//! which provider answered. It is what the dashboard shows as "current" and
//! what the history list stores.
//!
//! ## Invariant
//!
//! [`IpInfo::kind`] is always [`classify`](crate::classify::classify) applied
//! to [`IpInfo::ip`]. The only constructor computes it, and both fields are
//! private, so a record can never claim a type its address does not have.
//! Serialised, the kind appears under the key `type` as `"Public"` or
//! `"Private"`.

use std::fmt;

use serde::Serialize;

use crate::classify::classify;

/// Which address space an IP literal belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IpKind {
    Public,
    Private,
}

impl IpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpKind::Public => "Public",
            IpKind::Private => "Private",
        }
    }
}

impl fmt::Display for IpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location details for a single IP address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IpInfo {
    ip: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub isp: Option<String>,
    #[serde(rename = "type")]
    kind: IpKind,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl IpInfo {
    /// Create a record for `ip` with no location details.
    pub fn new(ip: impl Into<String>) -> Self {
        let ip = ip.into();
        let kind = classify(&ip);
        Self {
            ip,
            city: None,
            region: None,
            country: None,
            isp: None,
            kind,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Public or private, derived from `ip`.
    pub fn kind(&self) -> IpKind {
        self.kind
    }

    /// Both coordinates, if the provider returned them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Coordinates worth putting on a map: public addresses only.
    ///
    /// A coordinate of exactly `0.0` counts as present. Only a missing value
    /// hides the map, so a point on the equator or the prime meridian is
    /// still drawn where a truthiness check would drop it.
    pub fn map_position(&self) -> Option<(f64, f64)> {
        match self.kind {
            IpKind::Public => self.coordinates(),
            IpKind::Private => None,
        }
    }

    /// `"city, region, country"` with missing parts left empty.
    pub fn location_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.city.as_deref().unwrap_or_default(),
            self.region.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_ip() {
        assert_eq!(IpInfo::new("192.168.1.5").kind(), IpKind::Private);
        assert_eq!(IpInfo::new("8.8.8.8").kind(), IpKind::Public);
        assert_eq!(IpInfo::new("10.1.2.3").kind(), IpKind::Private);
    }

    #[test]
    fn test_serializes_type_key() {
        let info = IpInfo::new("8.8.8.8")
            .with_city("Mountain View")
            .with_coordinates(37.4, -122.1);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "Public");
        assert_eq!(json["city"], "Mountain View");
        assert_eq!(json["latitude"], 37.4);
        assert!(json["isp"].is_null());
    }

    #[test]
    fn test_map_position_public_only() {
        let public = IpInfo::new("8.8.8.8").with_coordinates(37.4, -122.1);
        assert_eq!(public.map_position(), Some((37.4, -122.1)));

        let private = IpInfo::new("10.0.0.1").with_coordinates(1.0, 2.0);
        assert_eq!(private.map_position(), None);

        let mut partial = IpInfo::new("8.8.8.8");
        partial.latitude = Some(37.4);
        assert_eq!(partial.map_position(), None);
    }

    #[test]
    fn test_zero_coordinates_still_mappable() {
        let info = IpInfo::new("8.8.8.8").with_coordinates(0.0, 0.0);
        assert_eq!(info.map_position(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_location_line() {
        let info = IpInfo::new("8.8.8.8")
            .with_city("Mountain View")
            .with_region("California")
            .with_country("United States");
        assert_eq!(info.location_line(), "Mountain View, California, United States");
        assert_eq!(IpInfo::new("8.8.8.8").location_line(), ", , ");
    }
}
