//! Private/public address classification by literal prefix.
//!
//! The rules only look at the text. Nothing checks that the input is an
//! address at all, so anything unrecognised (including garbage and IPv6
//! literals) lands in [`IpKind::Public`].

use std::sync::LazyLock;

use regex::Regex;

use crate::models::IpKind;

static RANGE_172: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^172\.(1[6-9]|2[0-9]|3[0-1])\.").expect("valid regex"));

/// Classify an address literal. First matching rule wins:
///
/// 1. `10.` prefix → private
/// 2. `192.168.` prefix → private
/// 3. `172.16.` through `172.31.` → private
/// 4. anything else → public
pub fn classify(ip: &str) -> IpKind {
    if ip.starts_with("10.") || ip.starts_with("192.168.") || RANGE_172.is_match(ip) {
        IpKind::Private
    } else {
        IpKind::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_ranges() {
        for ip in [
            "10.0.0.1",
            "10.255.255.255",
            "192.168.1.5",
            "192.168.0.1",
            "172.16.0.1",
            "172.20.10.3",
            "172.31.255.255",
        ] {
            assert_eq!(classify(ip), IpKind::Private, "{ip}");
        }
    }

    #[test]
    fn test_public_addresses() {
        for ip in ["8.8.8.8", "1.1.1.1", "172.15.0.1", "172.32.0.1", "192.169.1.1", "11.0.0.1"] {
            assert_eq!(classify(ip), IpKind::Public, "{ip}");
        }
    }

    #[test]
    fn test_prefix_only_no_validation() {
        // Only the prefix matters.
        assert_eq!(classify("10.garbage"), IpKind::Private);
        assert_eq!(classify("172.16."), IpKind::Private);
        assert_eq!(classify("192.168.999.999"), IpKind::Private);
    }

    #[test]
    fn test_malformed_is_public() {
        for ip in ["", "localhost", "not an ip", "10", "172.16", "::1", "fd00::1", " 10.0.0.1"] {
            assert_eq!(classify(ip), IpKind::Public, "{ip:?}");
        }
    }
}
