//! Visit counter and solved-example bookkeeping.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::prefs::{KeyValueBackend, PreferenceStore};

/// Blob field holding the visit counter.
pub const VISITS_KEY: &str = "visits";
/// Blob field holding the ISO-8601 time of the latest visit.
pub const LAST_VISIT_KEY: &str = "lastVisit";
/// Blob field holding the indices of examples whose solution was opened.
pub const SOLVED_KEY: &str = "solvedExamples";

/// Format a timestamp the way `Date.prototype.toISOString` does.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Aggregate shown in the developer console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of page loads so far.
    pub visits: u64,
    /// Time of the latest page load, if any was recorded.
    pub last_visit: Option<String>,
    /// Number of distinct examples whose solution was opened.
    pub solved_examples: usize,
}

/// Per-browser usage statistics.
#[derive(Debug, Clone)]
pub struct UserStats<B> {
    store: PreferenceStore<B>,
}

impl<B: KeyValueBackend> UserStats<B> {
    /// Stats backed by `store`.
    pub fn new(store: PreferenceStore<B>) -> Self {
        Self { store }
    }

    /// Count a page load and stamp its time. Returns the new visit count.
    pub fn track_visit(&self, now: DateTime<Utc>) -> u64 {
        let visits = self.visits().saturating_add(1);
        self.store.save(VISITS_KEY, visits);
        self.store.save(LAST_VISIT_KEY, iso_timestamp(now));
        visits
    }

    /// Record that the solution of example `index` was opened. Returns
    /// `true` when the index was not recorded before.
    pub fn mark_solved(&self, index: usize) -> bool {
        let mut solved = self.solved();
        if solved.contains(&index) {
            return false;
        }
        solved.push(index);
        self.store.save(SOLVED_KEY, &solved)
    }

    /// Solved indices in the order they were first opened.
    pub fn solved(&self) -> Vec<usize> {
        self.store.get_as(SOLVED_KEY).unwrap_or_default()
    }

    /// Visit counter, zero when never recorded.
    pub fn visits(&self) -> u64 {
        self.store.get_as(VISITS_KEY).unwrap_or(0)
    }

    /// Current aggregate.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            visits: self.visits(),
            last_visit: self.store.get_as(LAST_VISIT_KEY),
            solved_examples: self.solved().len(),
        }
    }
}
