use studyguide_shared::{config::PROGRESS_THROTTLE_MS, scroll};
use web_sys::{Document, HtmlElement, Window};

use crate::{
    config::classes,
    dom::{self, Listener},
};

fn update(document: &Document, bar: &HtmlElement) {
    let Some(root) = document.document_element() else {
        return;
    };
    let percent = scroll::progress_percent(
        dom::scroll_y(),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    dom::set_style(bar, "width", &format!("{percent:.2}%"));
}

/// Reading progress indicator along the top edge.
pub struct ProgressBar {
    _bar: HtmlElement,
    _scroll: Option<Listener>,
}

impl ProgressBar {
    pub fn mount(document: &Document, window: &Window) -> Option<Self> {
        let bar = dom::ensure_body_child(document, "div", classes::PROGRESS_BAR)?;
        update(document, &bar);

        let scroll = {
            let document = document.clone();
            let bar = bar.clone();
            Listener::throttled(window, "scroll", PROGRESS_THROTTLE_MS, move || update(&document, &bar))
        };
        Some(Self {
            _bar: bar,
            _scroll: scroll,
        })
    }
}
