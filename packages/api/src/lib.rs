//! # API crate — geolocation lookups and tracker state
//!
//! Everything the IP tracker knows about addresses lives here, free of any UI
//! code so it can be unit-tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`classify`] | Private/public classification by literal prefix |
//! | [`models`] | [`IpInfo`] record and [`IpKind`] |
//! | [`client`] | [`GeoProvider`] trait and the `reqwest`-backed [`IpWhoisClient`] |
//! | [`error`] | [`LookupError`] |
//! | [`history`] | Newest-first [`History`] of lookups |
//! | [`tracker`] | [`Tracker`]: current record plus history |

pub mod classify;
pub mod client;
pub mod error;
pub mod history;
pub mod models;
pub mod tracker;

pub use classify::classify;
pub use client::{GeoProvider, IpWhoisClient};
pub use error::LookupError;
pub use history::History;
pub use models::{IpInfo, IpKind};
pub use tracker::Tracker;
