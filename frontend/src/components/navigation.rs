use studyguide_shared::{
    config::{SCROLL_TARGET_OFFSET_PX, SCROLL_THROTTLE_MS},
    scroll,
};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::{
    config::{classes, selectors},
    dom::{self, set_class, Listener},
};

/// Header scroll style, current-page link highlight and smooth in-page
/// anchors.
pub struct NavigationManager {
    _listeners: Vec<Listener>,
}

impl NavigationManager {
    pub fn mount(document: &Document, window: &Window, header: Option<&Element>) -> Self {
        let links: Vec<HtmlElement> = dom::query_all(document, selectors::NAV_LINK);
        highlight_current_page(window, &links);

        let mut listeners = Vec::new();
        if let Some(header) = header {
            let header = header.clone();
            listeners.extend(Listener::throttled(window, "scroll", SCROLL_THROTTLE_MS, move || {
                set_class(&header, classes::SCROLLED, scroll::header_scrolled(dom::scroll_y()));
            }));
        }

        for link in &links {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            if !scroll::is_anchor_link(&href) {
                continue;
            }
            let document = document.clone();
            listeners.extend(Listener::new(link, "click", move |event| {
                event.prevent_default();
                match document.query_selector(&href) {
                    Ok(Some(target)) => dom::smooth_scroll_to(&target, SCROLL_TARGET_OFFSET_PX),
                    _ => tracing::debug!(href = %href, "anchor target not found"),
                }
            }));
        }

        Self {
            _listeners: listeners,
        }
    }
}

fn highlight_current_page(window: &Window, links: &[HtmlElement]) {
    let pathname = window.location().pathname().unwrap_or_default();
    let current = scroll::current_page(&pathname);
    for link in links {
        let active = link
            .get_attribute("href")
            .is_some_and(|href| scroll::is_active_link(&href, current));
        set_class(link, classes::ACTIVE, active);
    }
}
