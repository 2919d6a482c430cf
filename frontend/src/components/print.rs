use studyguide_shared::{config::SCROLL_THROTTLE_MS, scroll};
use web_sys::{Document, HtmlElement, Window};

use crate::{
    config::{classes, selectors},
    dom::{self, Listener},
    i18n::current::print as t,
};

const PRINT_BUTTON_STYLE: &str = "position: fixed; bottom: 6rem; right: 2rem; \
    background: var(--gradient-blue); color: white; border: none; padding: 0.75rem 1.5rem; \
    border-radius: 8px; cursor: pointer; font-size: 0.9rem; font-weight: 600; \
    box-shadow: var(--shadow-xl); z-index: 1000; opacity: 0; visibility: hidden; transition: all 0.3s;";

/// Expand every solution so the printout is complete.
fn before_print(document: &Document) {
    for solution in dom::query_all::<HtmlElement>(document, selectors::SOLUTION) {
        dom::set_style(&solution, "display", "block");
    }
}

/// Collapse again the solutions the reader had not opened.
fn after_print(document: &Document) {
    for solution in dom::query_all::<HtmlElement>(document, selectors::SOLUTION) {
        if !solution.class_list().contains(classes::VISIBLE) {
            dom::set_style(&solution, "display", "none");
        }
    }
}

/// Floating print button plus print-time solution expansion.
pub struct PrintManager {
    _button: Option<HtmlElement>,
    _listeners: Vec<Listener>,
}

impl PrintManager {
    pub fn mount(document: &Document, window: &Window) -> Self {
        let mut listeners = Vec::new();
        {
            let document = document.clone();
            listeners.extend(Listener::new(window, "beforeprint", move |_| before_print(&document)));
        }
        {
            let document = document.clone();
            listeners.extend(Listener::new(window, "afterprint", move |_| after_print(&document)));
        }

        let button = dom::ensure_body_child(document, "button", classes::PRINT_BUTTON);
        if let Some(button) = &button {
            button.set_text_content(Some(t::BUTTON));
            let _ = button.style().set_css_text(PRINT_BUTTON_STYLE);

            let toggled = button.clone();
            listeners.extend(Listener::throttled(window, "scroll", SCROLL_THROTTLE_MS, move || {
                let (opacity, visibility) = if scroll::print_button_visible(dom::scroll_y()) {
                    ("1", "visible")
                } else {
                    ("0", "hidden")
                };
                dom::set_style(&toggled, "opacity", opacity);
                dom::set_style(&toggled, "visibility", visibility);
            }));

            let window = window.clone();
            listeners.extend(Listener::new(button, "click", move |_| {
                if let Err(err) = window.print() {
                    tracing::warn!("print failed: {}", dom::js_error_message(&err));
                }
            }));
        }

        Self {
            _button: button,
            _listeners: listeners,
        }
    }
}
