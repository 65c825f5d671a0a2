//! Tracker context: current lookup, history and the lookup worker.
//!
//! [`TrackerProvider`] owns the [`Tracker`] signal and a coroutine that
//! receives lookup requests (`None` = the caller's own address). Each request
//! runs as its own task, so concurrent lookups resolve independently and land
//! in completion order. The tasks belong to the provider's scope and are
//! dropped when it unmounts, so a late response never touches a view that is
//! gone.

use api::{GeoProvider, IpInfo, IpWhoisClient, LookupError, Tracker};
use dioxus::prelude::*;
use futures::StreamExt;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::config::use_config;

/// A lookup request: `None` looks up the caller's own address.
pub type LookupRequest = Option<String>;

pub fn use_tracker() -> Signal<Tracker> {
    use_context::<Signal<Tracker>>()
}

/// Handle for queueing lookups from any view under [`TrackerProvider`].
pub fn use_lookup() -> Coroutine<LookupRequest> {
    use_coroutine_handle::<LookupRequest>()
}

/// Provides tracker state to its children and looks up the caller's own
/// address once on mount.
#[component]
pub fn TrackerProvider(children: Element) -> Element {
    let config = use_config();
    let tracker = use_context_provider(|| Signal::new(Tracker::new()));
    let activity_log = use_context::<Signal<ActivityLog>>();
    let client = use_hook(|| IpWhoisClient::new(&config.provider));

    let lookups = use_coroutine(move |mut rx: UnboundedReceiver<LookupRequest>| {
        let client = client.clone();
        async move {
            while let Some(ip) = rx.next().await {
                let client = client.clone();
                spawn(async move {
                    run_lookup(&client, ip, tracker, activity_log).await;
                });
            }
        }
    });

    use_hook(|| lookups.send(None));

    rsx! {
        {children}
    }
}

async fn run_lookup<P: GeoProvider>(
    provider: &P,
    ip: LookupRequest,
    mut tracker: Signal<Tracker>,
    mut activity_log: Signal<ActivityLog>,
) {
    let target = ip.as_deref().unwrap_or("own address").to_string();
    log_activity(&mut activity_log, LogLevel::Info, &format!("Looking up {target}"));

    let result = provider.fetch_info(ip.as_deref()).await;
    match settle(result, |info| tracker.write().record(info)) {
        Ok(summary) => {
            tracing::info!("Tracked {}", summary);
            log_activity(&mut activity_log, LogLevel::Success, &format!("Tracked {summary}"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch IP info for {}: {}", target, e);
            log_activity(
                &mut activity_log,
                LogLevel::Error,
                &format!("Lookup for {target} failed: {e}"),
            );
        }
    }
}

/// Hand a successful record to `write` and summarise it. A failure is
/// returned before `write` runs, so the tracker signal is never borrowed
/// mutably for it.
fn settle<W: FnOnce(IpInfo)>(
    result: Result<IpInfo, LookupError>,
    write: W,
) -> Result<String, LookupError> {
    let info = result?;
    let summary = format!("{} ({})", info.ip(), info.kind());
    write(info);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_records_success() {
        let mut tracker = Tracker::new();

        let summary = settle(Ok(IpInfo::new("192.168.1.5")), |info| tracker.record(info)).unwrap();

        assert_eq!(summary, "192.168.1.5 (Private)");
        assert_eq!(tracker.current().map(|c| c.ip()), Some("192.168.1.5"));
        assert_eq!(tracker.history().len(), 1);
    }

    #[test]
    fn test_settle_skips_write_on_failure() {
        let mut writes = 0;

        let err = settle(Err(LookupError::Status(503)), |_| writes += 1).unwrap_err();

        assert!(matches!(err, LookupError::Status(503)));
        assert_eq!(writes, 0);
    }

    #[test]
    fn test_failed_lookup_keeps_tracker() {
        let mut tracker = Tracker::new();
        tracker.record(IpInfo::new("8.8.8.8"));
        let before = tracker.clone();

        let result = settle(Err(LookupError::Provider("reserved range".into())), |info| {
            tracker.record(info)
        });

        assert!(result.is_err());
        assert_eq!(tracker, before);
    }
}
