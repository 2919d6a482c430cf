//! Example cards: category/search filtering, the result counter and the
//! show/hide solution buttons.

use std::{cell::RefCell, rc::Rc};

use studyguide_shared::{
    config::{ALL_CATEGORIES, REVEAL_RESTART_MS, SCROLL_TARGET_OFFSET_PX, SEARCH_DEBOUNCE_MS, SOLUTION_SCROLL_DELAY_MS},
    ContentItem, FilterState,
};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::{
    config::{classes, selectors},
    dom::{self, set_class, Debouncer, Listener},
    i18n::{current::examples as t, fill_one},
};

/// Read a card from the markup.
pub fn read_item(card: &HtmlElement) -> ContentItem {
    ContentItem {
        category: card.get_attribute("data-type").unwrap_or_default(),
        title: dom::child_text(card, selectors::EXAMPLE_TITLE),
        task: dom::child_text(card, selectors::TASK_TEXT),
        solution: dom::child_text(card, selectors::SOLUTION),
        text: card.text_content().unwrap_or_default(),
    }
}

struct ExamplesView {
    cards: Rc<[HtmlElement]>,
    items: Rc<[ContentItem]>,
    filter_select: Option<HtmlSelectElement>,
    search_input: Option<HtmlInputElement>,
    counter: Option<HtmlElement>,
    state: Rc<RefCell<FilterState>>,
}

impl ExamplesView {
    fn current_state(&self) -> FilterState {
        FilterState::new(
            self.filter_select
                .as_ref()
                .map(HtmlSelectElement::value)
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            self.search_input
                .as_ref()
                .map(HtmlInputElement::value)
                .unwrap_or_default(),
        )
    }

    fn refresh(&self) {
        let state = self.current_state();
        let outcome = state.apply(&self.items);

        let mut shown = Vec::with_capacity(outcome.count);
        for (card, visible) in self.cards.iter().zip(&outcome.visible) {
            if *visible {
                dom::set_style(card, "display", "block");
                dom::set_style(card, "animation", "none");
                shown.push(card.clone());
            } else {
                dom::set_style(card, "display", "none");
            }
        }
        if !shown.is_empty() {
            // Clearing the animation on the next tick restarts it.
            dom::after(REVEAL_RESTART_MS, move || {
                for card in &shown {
                    let _ = card.style().remove_property("animation");
                }
            });
        }

        if let Some(counter) = &self.counter {
            if outcome.show_counter {
                counter.set_text_content(Some(&fill_one(t::RESULTS_TEMPLATE, outcome.count)));
                dom::set_style(counter, "display", "block");
            } else {
                dom::set_style(counter, "display", "none");
            }
        }

        tracing::debug!(
            category = %state.category,
            query = %state.query,
            visible = outcome.count,
            "examples filtered"
        );
        *self.state.borrow_mut() = state;
    }
}

fn ensure_counter(document: &Document, controls: Option<&Element>) -> Option<HtmlElement> {
    if let Some(counter) = dom::query_one(document, selectors::RESULTS_COUNT) {
        return Some(counter);
    }
    let counter = dom::create(document, "div", classes::RESULTS_COUNT)?;
    match controls {
        Some(controls) => {
            let _ = controls.insert_adjacent_element("afterend", &counter);
        },
        None => tracing::debug!("no .controls, result counter stays detached"),
    }
    Some(counter)
}

fn toggle_solution(button: &HtmlElement) {
    let Some(solution) = button.next_element_sibling() else {
        return;
    };
    let revealing = !solution.class_list().contains(classes::VISIBLE);
    set_class(&solution, classes::VISIBLE, revealing);
    set_class(button, classes::ACTIVE, revealing);
    button.set_inner_html(if revealing { t::HIDE_SOLUTION } else { t::SHOW_SOLUTION });
    if revealing {
        dom::after(SOLUTION_SCROLL_DELAY_MS, move || {
            dom::smooth_scroll_to(&solution, SCROLL_TARGET_OFFSET_PX);
        });
    }
}

/// Wiring of the filter controls and solution buttons.
pub struct ExamplesManager {
    view: Rc<ExamplesView>,
    debouncer: Debouncer,
    _listeners: Vec<Listener>,
}

impl ExamplesManager {
    pub fn mount(
        document: &Document,
        cards: Rc<[HtmlElement]>,
        toggle_buttons: &[HtmlElement],
        filter_select: Option<HtmlSelectElement>,
        search_input: Option<HtmlInputElement>,
        controls: Option<&Element>,
        state: Rc<RefCell<FilterState>>,
    ) -> Self {
        let items: Rc<[ContentItem]> = cards.iter().map(read_item).collect();
        let view = Rc::new(ExamplesView {
            cards,
            items,
            counter: ensure_counter(document, controls),
            filter_select,
            search_input,
            state,
        });
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

        let mut listeners = Vec::new();
        if let Some(select) = &view.filter_select {
            let view = view.clone();
            listeners.extend(Listener::new(select, "change", move |_| view.refresh()));
        }
        if let Some(input) = &view.search_input {
            let view = view.clone();
            let debouncer = debouncer.clone();
            listeners.extend(Listener::new(input, "input", move |_| {
                let view = view.clone();
                debouncer.schedule(move || view.refresh());
            }));
        }
        for button in toggle_buttons {
            let target = button.clone();
            listeners.extend(Listener::new(button, "click", move |_| toggle_solution(&target)));
        }

        view.refresh();
        Self {
            view,
            debouncer,
            _listeners: listeners,
        }
    }

    /// Cards as read at startup, in page order.
    pub fn items(&self) -> Rc<[ContentItem]> {
        self.view.items.clone()
    }
}

impl Drop for ExamplesManager {
    fn drop(&mut self) {
        self.debouncer.cancel();
    }
}
