//! Integration tests for user preferences.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use studyguide_shared::{
        analytics::Analytics,
        config::{DATA_STORAGE_KEY, MAX_ANALYTICS_EVENTS},
        stats::UserStats,
        theme::Theme,
        MemoryBackend, PreferenceStore,
    };

    #[test]
    fn stats_and_analytics_share_one_blob() {
        let backend = MemoryBackend::new();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

        let stats = UserStats::new(PreferenceStore::with_default_namespace(&backend));
        let analytics = Analytics::new(PreferenceStore::with_default_namespace(&backend));

        stats.track_visit(now);
        stats.mark_solved(2);
        analytics.track("page_load", json!({ "page": "/index.html" }), "https://ege.test/index.html", now);
        stats.mark_solved(2);
        stats.mark_solved(5);

        let raw = backend.raw(DATA_STORAGE_KEY).expect("blob written");
        let blob: Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(blob["visits"], json!(1));
        assert_eq!(blob["lastVisit"], json!("2025-06-01T10:00:00.000Z"));
        assert_eq!(blob["solvedExamples"], json!([2, 5]));
        assert_eq!(blob["analyticsEvents"][0]["name"], json!("page_load"));
        assert_eq!(blob["analyticsEvents"][0]["url"], json!("https://ege.test/index.html"));
    }

    #[test]
    fn theme_lives_outside_the_blob() {
        let backend = MemoryBackend::new();
        let store = PreferenceStore::with_default_namespace(&backend);
        store.save("visits", 4);
        Theme::Dark.store(&backend);

        assert!(store.clear());
        assert_eq!(Theme::load(&backend), Theme::Dark);
        assert_eq!(store.get("visits"), None);
    }

    #[test]
    fn event_log_never_exceeds_cap() {
        let backend = MemoryBackend::new();
        let analytics = Analytics::new(PreferenceStore::with_default_namespace(&backend));
        let store = PreferenceStore::with_default_namespace(&backend);

        for i in 0..(MAX_ANALYTICS_EVENTS * 2 + 7) {
            analytics.track("solution_toggle", json!({ "index": i }), "u", Utc::now());
            let stored = store.get("analyticsEvents").expect("events stored");
            assert!(stored.as_array().map_or(0, Vec::len) <= MAX_ANALYTICS_EVENTS);
        }
    }

    #[test]
    fn storage_failures_degrade_quietly() {
        let backend = MemoryBackend::new();
        backend.insert_raw(DATA_STORAGE_KEY, "\u{0}garbage");
        let stats = UserStats::new(PreferenceStore::with_default_namespace(&backend));
        assert_eq!(stats.visits(), 0);

        backend.set_simulate_write_error(true);
        assert_eq!(stats.track_visit(Utc::now()), 1);
        assert_eq!(stats.visits(), 0);
        assert!(!stats.mark_solved(1));
    }
}
