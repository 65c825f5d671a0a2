//! Data models for the application.

mod ip_info;

pub use ip_info::{IpInfo, IpKind};
