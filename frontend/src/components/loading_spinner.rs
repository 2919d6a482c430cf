use web_sys::{Document, HtmlElement};

use crate::{
    config::classes,
    dom::{self, set_class},
};

/// Full-page loading overlay shown while the app starts.
pub struct Loader {
    overlay: Option<HtmlElement>,
}

impl Loader {
    pub fn new(document: &Document) -> Self {
        let overlay = dom::query_one::<HtmlElement>(document, &format!(".{}", classes::LOADER))
            .or_else(|| {
                let overlay = dom::ensure_body_child(document, "div", classes::LOADER)?;
                overlay.set_inner_html("<div class=\"loader-spinner\"></div>");
                let _ = overlay.set_attribute("role", "status");
                let _ = overlay.set_attribute("aria-busy", "true");
                Some(overlay)
            });
        Self { overlay }
    }

    pub fn show(&self) {
        if let Some(overlay) = &self.overlay {
            set_class(overlay, classes::HIDDEN, false);
        }
    }

    pub fn hide(&self) {
        if let Some(overlay) = &self.overlay {
            set_class(overlay, classes::HIDDEN, true);
            let _ = overlay.set_attribute("aria-busy", "false");
        }
    }
}
