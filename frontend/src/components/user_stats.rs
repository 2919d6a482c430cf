use std::rc::Rc;

use chrono::Utc;
use studyguide_shared::{stats::UserStats, PreferenceStore};
use web_sys::HtmlElement;

use crate::{dom::Listener, storage::LocalStorage};

pub type PageStats = UserStats<LocalStorage>;

/// Counts this visit and records which solutions get opened.
pub struct StatsTracker {
    stats: Rc<PageStats>,
    _listeners: Vec<Listener>,
}

impl StatsTracker {
    pub fn mount(toggle_buttons: &[HtmlElement]) -> Self {
        let stats = Rc::new(UserStats::new(PreferenceStore::with_default_namespace(LocalStorage)));
        let visits = stats.track_visit(Utc::now());
        tracing::debug!(visits, "visit recorded");

        let listeners = toggle_buttons
            .iter()
            .enumerate()
            .filter_map(|(index, button)| {
                let stats = stats.clone();
                Listener::new(button, "click", move |_| {
                    if stats.mark_solved(index) {
                        tracing::debug!(index, "example marked as solved");
                    }
                })
            })
            .collect();

        Self {
            stats,
            _listeners: listeners,
        }
    }

    pub fn stats(&self) -> Rc<PageStats> {
        self.stats.clone()
    }
}
