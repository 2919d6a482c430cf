//! Integration tests for content filtering.

#[cfg(test)]
mod tests {
    use studyguide_shared::{ContentItem, FilterState};

    const CATEGORIES: [&str; 5] = ["all", "quadratic", "modulus", "graphical", "missing"];
    const QUERIES: [&str; 7] = ["", "discriminant", "DISCRIMINANT", "x", "|x", "no such text", " "];

    fn page() -> Vec<ContentItem> {
        vec![
            ContentItem::new("quadratic", "Two roots", "x^2 - 2ax + 1 = 0", "Require the discriminant to be positive."),
            ContentItem::new("quadratic", "One root", "x^2 + a = 0", "Discriminant equals zero."),
            ContentItem::new("quadratic", "Vieta", "Sum of roots equals a", "Use Vieta's formulas."),
            ContentItem::new("quadratic", "Bounds", "Both roots greater than 1", "Check the discriminant and the vertex."),
            ContentItem::new("modulus", "Absolute value", "|x - a| = 3", "Split into cases."),
            ContentItem::new("modulus", "Nested", "||x| - 1| = a", "Draw it."),
            ContentItem::new("modulus", "Inequality", "|x| < a", "Empty for a <= 0."),
            ContentItem::new("graphical", "Family of lines", "y = ax + 1", "Rotate around (0, 1)."),
            ContentItem::new("graphical", "Circles", "x^2 + y^2 = a", "Radius is sqrt(a)."),
            ContentItem::new("graphical", "Parabola shift", "y = (x - a)^2", "Slide along the axis."),
        ]
    }

    fn expected(items: &[ContentItem], category: &str, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| category == "all" || item.category == category)
            .filter(|(_, item)| item.text.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn visible_set_matches_definition_for_every_combination() {
        let items = page();
        for category in CATEGORIES {
            for query in QUERIES {
                let outcome = FilterState::new(category, query).apply(&items);
                let want = expected(&items, category, query);
                assert_eq!(outcome.visible_indices(), want, "category={category:?} query={query:?}");
                assert_eq!(outcome.count, want.len());
                assert_eq!(outcome.show_counter, category != "all" || !query.is_empty());
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = page();
        for category in CATEGORIES {
            for query in QUERIES {
                let state = FilterState::new(category, query);
                assert_eq!(state.apply(&items), state.apply(&items));
            }
        }
    }

    #[test]
    fn reset_shows_everything_and_hides_counter() {
        let items = page();
        let narrowed = FilterState::new("modulus", "split").apply(&items);
        assert_eq!(narrowed.count, 1);

        let reset = FilterState::default().apply(&items);
        assert_eq!(reset.count, items.len());
        assert!(reset.visible.iter().all(|shown| *shown));
        assert!(!reset.show_counter);
    }

    #[test]
    fn category_scenario_counts_four_quadratic_cards() {
        let outcome = FilterState::new("quadratic", "").apply(&page());
        assert_eq!(outcome.count, 4);
        assert!(outcome.show_counter);
    }

    #[test]
    fn query_scenario_finds_the_three_discriminant_cards() {
        let outcome = FilterState::new("all", "discriminant").apply(&page());
        assert_eq!(outcome.visible_indices(), vec![0, 1, 3]);
    }

    #[test]
    fn matches_agrees_with_apply() {
        let items = page();
        let state = FilterState::new("graphical", "a");
        let outcome = state.apply(&items);
        for (item, shown) in items.iter().zip(outcome.visible) {
            assert_eq!(state.matches(item), shown);
        }
    }
}
