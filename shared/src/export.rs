//! JSON export of the example cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

/// MIME type of the exported file.
pub const EXPORT_MIME: &str = "application/json";

/// One exported card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// 1-based position on the page.
    pub id: usize,
    /// Card heading.
    pub title: String,
    /// Problem statement.
    pub task: String,
    /// Worked solution.
    pub solution: String,
    /// Category tag, named after the card's `data-type` attribute.
    #[serde(rename = "type")]
    pub category: String,
}

/// Records for every card, in page order.
pub fn export_records(items: &[ContentItem]) -> Vec<ExportRecord> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ExportRecord {
            id: index + 1,
            title: item.title.clone(),
            task: item.task.clone(),
            solution: item.solution.clone(),
            category: item.category.clone(),
        })
        .collect()
}

/// Pretty-printed (two-space indented) JSON document of every card.
pub fn export_json(items: &[ContentItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_records(items))
}

/// Download name, suffixed with the export date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("ege-math-examples-{}.json", date.format("%Y-%m-%d"))
}

/// A ready-to-download export: file name plus body.
///
/// A page without cards still produces a document, holding `[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Dated download name.
    pub filename: String,
    /// Pretty-printed JSON body.
    pub json: String,
}

impl ExportDocument {
    /// Export every card as of `date`.
    pub fn build(items: &[ContentItem], date: NaiveDate) -> serde_json::Result<Self> {
        Ok(Self {
            filename: export_filename(date),
            json: export_json(items)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn records_are_numbered_from_one_in_page_order() {
        let items = vec![
            ContentItem::new("quadratic", "First", "Solve A", "Answer A"),
            ContentItem::new("modulus", "Second", "Solve B", "Answer B"),
        ];
        let json = export_json(&items).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            json!([
                { "id": 1, "title": "First", "task": "Solve A", "solution": "Answer A", "type": "quadratic" },
                { "id": 2, "title": "Second", "task": "Solve B", "solution": "Answer B", "type": "modulus" },
            ])
        );
        assert!(json.contains("\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn empty_page_exports_empty_list() {
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn page_without_cards_still_yields_a_document() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let document = ExportDocument::build(&[], date).unwrap();
        assert_eq!(document.json, "[]");
        assert_eq!(document.filename, "ege-math-examples-2024-02-29.json");
    }

    #[test]
    fn filename_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(export_filename(date), "ege-math-examples-2026-10-17.json");
    }
}
