use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use serde::Serialize;
use studyguide_shared::{theme::Theme, FilterState};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::{
    config::selectors,
    dom::{by_id, query_all, query_one},
};

/// Session state owned by the app. Components get clones of the cells they
/// need, never the whole struct.
#[derive(Clone, Default)]
pub struct AppState {
    pub filter: Rc<RefCell<FilterState>>,
    pub theme: Rc<Cell<Theme>>,
    pub active_example: Rc<Cell<Option<usize>>>,
}

/// What `EGE_APP.state()` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub current_filter: String,
    pub search_query: String,
    pub theme: &'static str,
    pub active_example: Option<usize>,
}

impl AppState {
    pub fn snapshot(&self) -> StateSnapshot {
        let filter = self.filter.borrow();
        StateSnapshot {
            current_filter: filter.category.clone(),
            search_query: filter.query.clone(),
            theme: self.theme.get().as_str(),
            active_example: self.active_example.get(),
        }
    }
}

/// Page elements looked up once, right after the document is parsed, and
/// handed to the components that use them.
pub struct PageAnchors {
    pub document: Document,
    pub nav: Option<Element>,
    pub header: Option<Element>,
    pub controls: Option<Element>,
    pub filter_select: Option<HtmlSelectElement>,
    pub search_input: Option<HtmlInputElement>,
    pub examples: Rc<[HtmlElement]>,
    pub toggle_buttons: Rc<[HtmlElement]>,
}

impl PageAnchors {
    pub fn resolve(document: Document) -> Self {
        let anchors = Self {
            nav: query_one(&document, selectors::NAV),
            header: query_one(&document, selectors::HEADER),
            controls: query_one(&document, selectors::CONTROLS),
            filter_select: by_id(&document, selectors::TYPE_FILTER_ID),
            search_input: by_id(&document, selectors::SEARCH_BOX_ID),
            examples: query_all(&document, selectors::EXAMPLE).into(),
            toggle_buttons: query_all(&document, selectors::TOGGLE_BUTTON).into(),
            document,
        };
        tracing::debug!(
            examples = anchors.examples.len(),
            toggles = anchors.toggle_buttons.len(),
            has_search = anchors.search_input.is_some(),
            has_filter = anchors.filter_select.is_some(),
            "resolved page anchors"
        );
        anchors
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fresh_state_reports_defaults() {
        let snapshot = serde_json::to_value(AppState::default().snapshot()).unwrap();
        assert_eq!(
            snapshot,
            json!({
                "currentFilter": "all",
                "searchQuery": "",
                "theme": "light",
                "activeExample": null,
            })
        );
    }

    #[test]
    fn snapshot_follows_the_shared_cells() {
        let state = AppState::default();
        let observed = state.clone();
        *state.filter.borrow_mut() = FilterState::new("quadratic", "дискриминант");
        state.theme.set(Theme::Dark);
        state.active_example.set(Some(2));

        let snapshot = observed.snapshot();
        assert_eq!(snapshot.current_filter, "quadratic");
        assert_eq!(snapshot.search_query, "дискриминант");
        assert_eq!(snapshot.theme, "dark");
        assert_eq!(snapshot.active_example, Some(2));
    }
}
