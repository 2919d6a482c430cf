//! Local-only interaction log.
//!
//! Events are kept in memory for the session and appended to the preference
//! blob, which retains only the newest [`MAX_ANALYTICS_EVENTS`].

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::MAX_ANALYTICS_EVENTS,
    prefs::{KeyValueBackend, PreferenceStore},
    stats::iso_timestamp,
};

/// Blob field holding the persisted events.
pub const EVENTS_KEY: &str = "analyticsEvents";

/// One tracked interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `page_load`.
    pub name: String,
    /// Free-form payload.
    #[serde(default)]
    pub data: Value,
    /// ISO-8601 time the event was tracked.
    pub timestamp: String,
    /// Page URL at the time of the event.
    pub url: String,
}

/// Event tracker.
#[derive(Debug)]
pub struct Analytics<B> {
    store: PreferenceStore<B>,
    session: RefCell<Vec<AnalyticsEvent>>,
}

impl<B: KeyValueBackend> Analytics<B> {
    /// Tracker persisting into `store`.
    pub fn new(store: PreferenceStore<B>) -> Self {
        Self {
            store,
            session: RefCell::new(Vec::new()),
        }
    }

    /// Record an event and persist the capped log.
    pub fn track(
        &self,
        name: &str,
        data: Value,
        url: &str,
        now: DateTime<Utc>,
    ) -> AnalyticsEvent {
        let event = AnalyticsEvent {
            name: name.to_string(),
            data,
            timestamp: iso_timestamp(now),
            url: url.to_string(),
        };
        tracing::info!(event = %event.name, data = %event.data, url = %event.url, "analytics event");
        self.session.borrow_mut().push(event.clone());

        let mut persisted = self.events();
        persisted.push(event.clone());
        if persisted.len() > MAX_ANALYTICS_EVENTS {
            let excess = persisted.len() - MAX_ANALYTICS_EVENTS;
            persisted.drain(..excess);
        }
        self.store.save(EVENTS_KEY, &persisted);
        event
    }

    /// Persisted events, oldest first. Empty when absent or malformed.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.store.get_as(EVENTS_KEY).unwrap_or_default()
    }

    /// Events tracked since this tracker was created.
    pub fn session_events(&self) -> Vec<AnalyticsEvent> {
        self.session.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::prefs::MemoryBackend;

    #[test]
    fn persisted_log_is_capped_to_newest_events() {
        let backend = MemoryBackend::new();
        let analytics = Analytics::new(PreferenceStore::with_default_namespace(&backend));
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        for i in 0..130 {
            analytics.track("click", json!({ "n": i }), "https://example.test/", now);
            assert!(analytics.events().len() <= MAX_ANALYTICS_EVENTS);
        }

        let events = analytics.events();
        assert_eq!(events.len(), MAX_ANALYTICS_EVENTS);
        assert_eq!(events[0].data, json!({ "n": 30 }));
        assert_eq!(events[99].data, json!({ "n": 129 }));
        assert_eq!(analytics.session_events().len(), 130);
    }

    #[test]
    fn event_carries_url_and_iso_timestamp() {
        let backend = MemoryBackend::new();
        let analytics = Analytics::new(PreferenceStore::with_default_namespace(&backend));
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let event = analytics.track("page_load", json!({ "page": "/index.html" }), "https://example.test/index.html", now);
        assert_eq!(event.timestamp, "2024-03-09T14:05:07.000Z");
        assert_eq!(analytics.events(), vec![event]);
    }

    #[test]
    fn malformed_log_restarts_from_empty() {
        let backend = MemoryBackend::new();
        let store = PreferenceStore::with_default_namespace(&backend);
        store.save(EVENTS_KEY, "oops");

        let analytics = Analytics::new(store);
        assert!(analytics.events().is_empty());
        analytics.track("page_load", Value::Null, "u", Utc::now());
        assert_eq!(analytics.events().len(), 1);
    }
}
