use studyguide_shared::{config::SCROLL_THROTTLE_MS, scroll};
use web_sys::{Document, HtmlElement, Window};

use crate::{
    config::classes,
    dom::{self, set_class, Listener},
    i18n::current::scroll_to_top as t,
};

/// "Back to top" button, shown once the page is scrolled far enough.
pub struct ScrollToTop {
    _button: HtmlElement,
    _listeners: Vec<Listener>,
}

impl ScrollToTop {
    pub fn mount(document: &Document, window: &Window) -> Option<Self> {
        let button = dom::ensure_body_child(document, "button", classes::SCROLL_TO_TOP)?;
        let _ = button.set_attribute("aria-label", t::TOOLTIP);
        let _ = button.set_attribute("title", t::TOOLTIP);
        if button.inner_html().is_empty() {
            button.set_text_content(Some(t::GLYPH));
        }

        let update = {
            let button = button.clone();
            move || set_class(&button, classes::VISIBLE, scroll::scroll_to_top_visible(dom::scroll_y()))
        };
        update();

        let listeners = [
            Listener::new(&button, "click", |event| {
                event.prevent_default();
                dom::scroll_to_top();
            }),
            Listener::throttled(window, "scroll", SCROLL_THROTTLE_MS, update),
        ];

        Some(Self {
            _button: button,
            _listeners: listeners.into_iter().flatten().collect(),
        })
    }
}
