//! # Geolocation client — one outbound lookup per call
//!
//! [`GeoProvider`] is the seam the UI calls through. [`IpWhoisClient`] is the
//! production implementation, talking to `ipwhois.app` (or whatever
//! [`ProviderConfig::base_url`] points at) over `reqwest`, which uses `fetch`
//! in the browser.
//!
//! ## Request
//!
//! | Call | URL |
//! |------|-----|
//! | `fetch_info(None)` | `base_url` (the provider resolves the caller's own address) |
//! | `fetch_info(Some("8.8.8.8"))` | `base_url` + `8.8.8.8` |
//!
//! The address is appended exactly as given. Trimming and rejecting blank
//! input is the caller's job; `Some("")` asks for `base_url` itself.
//!
//! ## Response
//!
//! The body is decoded into a private [`ProviderResponse`] where everything
//! except `ip` is optional, then normalised into [`IpInfo`]. The record's kind
//! comes from the `ip` the provider **returned**, so a self lookup is
//! classified by the resolved address. `ipwhois` reports unknown or reserved
//! addresses with `"success": false`; that becomes [`LookupError::Provider`].
//!
//! One attempt, no retry, and no timeout beyond the transport's own.

use std::future::Future;

use serde::Deserialize;
use store::ProviderConfig;

use crate::error::LookupError;
use crate::models::IpInfo;

/// Async source of geolocation records.
pub trait GeoProvider {
    fn fetch_info(
        &self,
        ip: Option<&str>,
    ) -> impl Future<Output = Result<IpInfo, LookupError>>;
}

/// Raw provider payload. Field names follow `ipwhois.app`.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    ip: String,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    isp: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl ProviderResponse {
    fn into_info(self) -> Result<IpInfo, LookupError> {
        if self.success == Some(false) {
            return Err(LookupError::Provider(
                self.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let mut info = IpInfo::new(self.ip);
        info.city = self.city;
        info.region = self.region;
        info.country = self.country;
        info.isp = self.isp;
        info.latitude = self.latitude;
        info.longitude = self.longitude;
        Ok(info)
    }
}

/// Decode a provider body into a normalised record.
pub fn parse_response(body: &str) -> Result<IpInfo, LookupError> {
    let raw: ProviderResponse = serde_json::from_str(body)?;
    raw.into_info()
}

/// Build the request URL for a lookup.
pub fn lookup_url(base_url: &str, ip: Option<&str>) -> String {
    match ip {
        Some(ip) => format!("{base_url}{ip}"),
        None => base_url.to_string(),
    }
}

/// `reqwest`-backed client for `ipwhois.app`-compatible providers.
#[derive(Clone, Debug)]
pub struct IpWhoisClient {
    http: reqwest::Client,
    base_url: String,
}

impl IpWhoisClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

}

impl Default for IpWhoisClient {
    fn default() -> Self {
        Self::new(&ProviderConfig::default())
    }
}

impl GeoProvider for IpWhoisClient {
    async fn fetch_info(&self, ip: Option<&str>) -> Result<IpInfo, LookupError> {
        let url = lookup_url(&self.base_url, ip);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}
