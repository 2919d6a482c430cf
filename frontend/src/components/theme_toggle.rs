use std::{cell::Cell, rc::Rc};

use studyguide_shared::theme::Theme;
use web_sys::{Document, Element, HtmlElement};

use crate::{
    config::classes,
    dom::{self, Listener},
    i18n::current::theme_toggle as t,
    storage::LocalStorage,
};

fn apply_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    theme.store(&LocalStorage);
}

fn render_button(button: &HtmlElement, theme: Theme) {
    let (icon, label) = match theme {
        Theme::Dark => (t::ICON_DARK, t::SWITCH_TO_LIGHT),
        Theme::Light => (t::ICON_LIGHT, t::SWITCH_TO_DARK),
    };
    button.set_inner_html(&format!(
        "<span class=\"theme-icon\">{icon}</span><span class=\"theme-text\">{label}</span>"
    ));
    let _ = button.set_attribute("aria-pressed", &(theme == Theme::Dark).to_string());
}

/// Applies the stored theme and mounts the toggle button into `<nav>`.
pub struct ThemeManager {
    _button: Option<HtmlElement>,
    _click: Option<Listener>,
}

impl ThemeManager {
    pub fn mount(document: &Document, nav: Option<&Element>, theme: Rc<Cell<Theme>>) -> Self {
        theme.set(Theme::load(&LocalStorage));
        apply_theme(document, theme.get());

        let Some(nav) = nav else {
            tracing::debug!("no <nav>, theme toggle not mounted");
            return Self {
                _button: None,
                _click: None,
            };
        };
        let Some(button) = dom::create(document, "button", classes::THEME_TOGGLE) else {
            return Self {
                _button: None,
                _click: None,
            };
        };
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", t::ARIA_LABEL);
        render_button(&button, theme.get());
        let _ = nav.append_child(&button);

        let click = {
            let document = document.clone();
            let rendered = button.clone();
            Listener::new(&button, "click", move |_| {
                let next = theme.get().toggled();
                theme.set(next);
                apply_theme(&document, next);
                render_button(&rendered, next);
                tracing::debug!(theme = next.as_str(), "theme toggled");
            })
        };

        Self {
            _button: Some(button),
            _click: click,
        }
    }
}
