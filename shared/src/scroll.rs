//! Scroll-position rules for the passive page chrome.

use crate::config::{
    HEADER_SCROLLED_THRESHOLD_PX, PRINT_BUTTON_THRESHOLD_PX, SCROLL_TO_TOP_THRESHOLD_PX,
};

/// Reading progress in percent, clamped to `0..=100`. A page that does not
/// scroll reports zero.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether the "back to top" button is shown.
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TO_TOP_THRESHOLD_PX
}

/// Whether the header uses its scrolled style.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD_PX
}

/// Whether the print button is shown.
pub fn print_button_visible(scroll_y: f64) -> bool {
    scroll_y > PRINT_BUTTON_THRESHOLD_PX
}

/// File name of the current page, `index.html` for a directory URL.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "index.html",
    }
}

/// Whether a nav link points at the current page.
pub fn is_active_link(href: &str, current_page: &str) -> bool {
    href == current_page
}

/// Whether a nav link targets an anchor on this page.
pub fn is_anchor_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Document offset to scroll to so that an element whose bounding box top is
/// `element_top` ends up `offset` pixels below the viewport top.
pub fn scroll_target(element_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    element_top + page_y_offset - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_proportional_and_clamped() {
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!scroll_to_top_visible(300.0));
        assert!(scroll_to_top_visible(301.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
        assert!(!print_button_visible(500.0));
        assert!(print_button_visible(501.0));
    }

    #[test]
    fn current_page_defaults_to_index() {
        assert_eq!(current_page("/site/params.html"), "params.html");
        assert_eq!(current_page("/site/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert!(is_active_link("params.html", current_page("/params.html")));
        assert!(!is_active_link("index.html", current_page("/params.html")));
    }

    #[test]
    fn anchors_and_targets() {
        assert!(is_anchor_link("#theory"));
        assert!(!is_anchor_link("theory.html"));
        assert_eq!(scroll_target(250.0, 1000.0, 100.0), 1150.0);
    }
}
