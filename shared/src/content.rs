//! The worked-example cards the page is built around.

use serde::{Deserialize, Serialize};

/// One worked example card on the page.
///
/// Cards are read once from the static markup and never change afterwards;
/// their identity is their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Category tag (`data-type` attribute).
    pub category: String,
    /// Card heading.
    pub title: String,
    /// Problem statement.
    pub task: String,
    /// Worked solution, hidden until requested.
    pub solution: String,
    /// Full rendered text of the card, searched by the filter.
    pub text: String,
}

impl ContentItem {
    /// Build a card whose searchable text is its title, task and solution.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        task: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let task = task.into();
        let solution = solution.into();
        let text = format!("{title}\n{task}\n{solution}");
        Self {
            category: category.into(),
            title,
            task,
            solution,
            text,
        }
    }
}
