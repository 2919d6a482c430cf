//! Category and free-text filtering of the example cards.
//!
//! A card is visible exactly when its category matches the selected one (or
//! the selector is on [`ALL_CATEGORIES`]) and its rendered text contains the
//! query, ignoring case. The result counter is only shown while some filter
//! is active.

use serde::{Deserialize, Serialize};

use crate::{config::ALL_CATEGORIES, content::ContentItem};

/// Current value of the category selector and the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category tag, or `"all"`.
    pub category: String,
    /// Search box contents as typed.
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Filter state for a selector value and a search query.
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// True when neither a category nor a query narrows the list.
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORIES && self.query.is_empty()
    }

    /// Whether a single card passes both predicates.
    pub fn matches(&self, item: &ContentItem) -> bool {
        Matcher::new(self).matches(item)
    }

    /// Run the filter over every card.
    pub fn apply(&self, items: &[ContentItem]) -> FilterOutcome {
        let matcher = Matcher::new(self);
        let visible: Vec<bool> = items.iter().map(|item| matcher.matches(item)).collect();
        let count = visible.iter().filter(|shown| **shown).count();
        FilterOutcome {
            visible,
            count,
            show_counter: !self.is_default(),
        }
    }
}

// Lowercases the needle once per pass instead of once per card.
struct Matcher<'a> {
    category: &'a str,
    needle: String,
}

impl<'a> Matcher<'a> {
    fn new(state: &'a FilterState) -> Self {
        Self {
            category: &state.category,
            needle: state.query.to_lowercase(),
        }
    }

    fn matches(&self, item: &ContentItem) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || item.category == self.category;
        category_ok && (self.needle.is_empty() || item.text.to_lowercase().contains(&self.needle))
    }
}

/// Result of one filter pass, index-aligned with the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// `visible[i]` tells whether card `i` should be displayed.
    pub visible: Vec<bool>,
    /// Number of visible cards.
    pub count: usize,
    /// Whether the "N found" counter should be displayed.
    pub show_counter: bool,
}

impl FilterOutcome {
    /// Positions of the visible cards, in page order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, shown)| shown.then_some(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<ContentItem> {
        let mut items = Vec::new();
        for i in 0..4 {
            let solution = if i < 3 {
                "Compute the Discriminant first."
            } else {
                "Factor directly."
            };
            items.push(ContentItem::new("quadratic", format!("Quadratic {i}"), "x^2 + ax + 1 = 0", solution));
        }
        for i in 0..3 {
            items.push(ContentItem::new("modulus", format!("Modulus {i}"), "|x - a| = 2", "Split by sign."));
        }
        for i in 0..3 {
            items.push(ContentItem::new("graphical", format!("Graphical {i}"), "Plot y = ax", "Read the picture."));
        }
        items
    }

    #[test]
    fn category_only_selects_tagged_cards() {
        let items = deck();
        let outcome = FilterState::new("quadratic", "").apply(&items);
        assert_eq!(outcome.count, 4);
        assert_eq!(outcome.visible_indices(), vec![0, 1, 2, 3]);
        assert!(outcome.show_counter);
    }

    #[test]
    fn query_matches_solution_text_case_insensitively() {
        let items = deck();
        let outcome = FilterState::new("all", "discriminant").apply(&items);
        assert_eq!(outcome.visible_indices(), vec![0, 1, 2]);

        let upper = FilterState::new("all", "DISCRIMINANT").apply(&items);
        assert_eq!(upper.visible, outcome.visible);
    }

    #[test]
    fn default_state_shows_everything_and_hides_counter() {
        let items = deck();
        let outcome = FilterState::default().apply(&items);
        assert_eq!(outcome.count, items.len());
        assert!(!outcome.show_counter);
    }

    #[test]
    fn both_predicates_must_hold() {
        let items = deck();
        let outcome = FilterState::new("modulus", "discriminant").apply(&items);
        assert_eq!(outcome.count, 0);
        assert!(outcome.visible.iter().all(|shown| !shown));
        assert!(outcome.show_counter);
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let outcome = FilterState::new("trigonometry", "").apply(&deck());
        assert_eq!(outcome.count, 0);
    }

    #[test]
    fn non_ascii_query_is_case_folded() {
        let items = vec![ContentItem::new("quadratic", "Дискриминант", "", "")];
        let outcome = FilterState::new("all", "дискриминант").apply(&items);
        assert_eq!(outcome.count, 1);
    }
}
