//! # Tracker state — "current" plus history
//!
//! [`Tracker`] holds what the dashboard and history views render: the most
//! recently resolved record and the list of every record resolved so far.
//!
//! Results are recorded in whatever order lookups finish. Two lookups in
//! flight at once both land, and the later completion wins "current".
//! Only successful lookups reach [`Tracker::record`]; a failure is handled
//! by the caller and never touches the tracker.

use crate::history::History;
use crate::models::IpInfo;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tracker {
    current: Option<IpInfo>,
    history: History,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record most recently recorded, if any.
    pub fn current(&self) -> Option<&IpInfo> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Overwrite "current" and prepend to history.
    pub fn record(&mut self, info: IpInfo) {
        self.history.append(info.clone());
        self.current = Some(info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GeoProvider;
    use crate::error::LookupError;
    use crate::models::IpKind;
    use std::collections::HashMap;

    /// Provider answering from a fixed table. `None` is the self lookup.
    struct StaticProvider {
        answers: HashMap<Option<String>, IpInfo>,
    }

    impl StaticProvider {
        fn new() -> Self {
            Self {
                answers: HashMap::new(),
            }
        }

        fn answer(mut self, ip: Option<&str>, info: IpInfo) -> Self {
            self.answers.insert(ip.map(str::to_string), info);
            self
        }
    }

    impl GeoProvider for StaticProvider {
        async fn fetch_info(&self, ip: Option<&str>) -> Result<IpInfo, LookupError> {
            self.answers
                .get(&ip.map(str::to_string))
                .cloned()
                .ok_or_else(|| LookupError::Provider("no answer".to_string()))
        }
    }

    #[tokio::test]
    async fn test_lookup_updates_current_and_history() {
        let provider = StaticProvider::new().answer(
            Some("8.8.8.8"),
            IpInfo::new("8.8.8.8")
                .with_city("Mountain View")
                .with_coordinates(37.4, -122.1),
        );
        let mut tracker = Tracker::new();

        tracker.record(provider.fetch_info(Some("8.8.8.8")).await.unwrap());

        let current = tracker.current().unwrap();
        assert_eq!(current.ip(), "8.8.8.8");
        assert_eq!(current.kind(), IpKind::Public);
        assert_eq!(current.city.as_deref(), Some("Mountain View"));
        assert_eq!(current.latitude, Some(37.4));
        assert_eq!(current.longitude, Some(-122.1));
        assert_eq!(tracker.history().list(), [current.clone()]);
    }

    #[tokio::test]
    async fn test_self_lookup_then_unknown_address() {
        let provider = StaticProvider::new().answer(None, IpInfo::new("203.0.113.9"));
        let mut tracker = Tracker::new();

        tracker.record(provider.fetch_info(None).await.unwrap());
        assert_eq!(tracker.current().map(|c| c.ip()), Some("203.0.113.9"));

        let err = provider.fetch_info(Some("1.2.3.4")).await.unwrap_err();
        assert!(matches!(err, LookupError::Provider(_)));
        assert_eq!(tracker.history().len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_reverse_chronological() {
        let ips = ["1.1.1.1", "192.168.1.5", "8.8.8.8", "172.20.0.1"];
        let provider = ips
            .iter()
            .fold(StaticProvider::new(), |p, ip| p.answer(Some(*ip), IpInfo::new(*ip)));
        let mut tracker = Tracker::new();

        for ip in ips {
            tracker.record(provider.fetch_info(Some(ip)).await.unwrap());
        }

        assert_eq!(tracker.history().len(), ips.len());
        assert_eq!(tracker.history().list()[0].ip(), "172.20.0.1");
        assert_eq!(tracker.history().list()[3].ip(), "1.1.1.1");
        assert_eq!(tracker.current().map(|c| c.ip()), Some("172.20.0.1"));
        assert_eq!(tracker.history().list()[1].kind(), IpKind::Private);
    }

    #[test]
    fn test_completion_order_wins() {
        let mut tracker = Tracker::new();
        // Request for A issued first, B resolves first.
        tracker.record(IpInfo::new("8.8.4.4"));
        tracker.record(IpInfo::new("8.8.8.8"));

        assert_eq!(tracker.current().map(|c| c.ip()), Some("8.8.8.8"));
        assert_eq!(tracker.history().len(), 2);
    }
}
