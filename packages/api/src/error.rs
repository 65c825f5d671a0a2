//! Lookup error type.

use thiserror::Error;

/// Why a geolocation lookup produced no record.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never completed (DNS, TLS, connection reset, CORS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect.
    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered but reported the lookup as failed.
    #[error("lookup rejected: {0}")]
    Provider(String),
}
