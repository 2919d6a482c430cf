pub mod ru;

pub use ru as current;

/// Substitute the first `{}` of `template`. Templates without a placeholder
/// come back unchanged.
pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use studyguide_shared::{ContentItem, FilterState};

    use super::*;

    #[test]
    fn results_counter_shows_the_number_of_matches() {
        let items = [
            ContentItem::new("quadratic", "Квадратное 1", "x^2 + ax + 1 = 0", "дискриминант"),
            ContentItem::new("quadratic", "Квадратное 2", "x^2 - 2ax + a = 0", "дискриминант"),
            ContentItem::new("modulus", "Модуль", "|x - a| = 2", "раскрываем модуль"),
            ContentItem::new("quadratic", "Квадратное 3", "ax^2 + x - 1 = 0", "дискриминант"),
            ContentItem::new("quadratic", "Квадратное 4", "x^2 + a = 0", "корни"),
        ];
        let outcome = FilterState::new("quadratic", "").apply(&items);
        assert!(outcome.show_counter);
        assert_eq!(
            fill_one(current::examples::RESULTS_TEMPLATE, outcome.count),
            "Найдено примеров: 4"
        );
    }

    #[test]
    fn only_the_first_placeholder_is_filled() {
        assert_eq!(fill_one("{} из {}", 3), "3 из {}");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(fill_one(current::print::BUTTON, 7), current::print::BUTTON);
    }
}
