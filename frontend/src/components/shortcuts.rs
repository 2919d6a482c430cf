use studyguide_shared::keyboard::{match_shortcut, KeyChord, Shortcut};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent};

use crate::{components::toast::Toaster, dom::Listener, i18n::current::shortcuts as t};

/// Global `keydown` dispatch.
pub struct KeyboardShortcuts {
    _keydown: Option<Listener>,
}

impl KeyboardShortcuts {
    pub fn mount(document: &Document, search_input: Option<HtmlInputElement>, toaster: Toaster) -> Self {
        let keydown = Listener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            let chord = KeyChord {
                key: &key,
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };
            let Some(shortcut) = match_shortcut(chord) else {
                return;
            };
            if shortcut.prevents_default() {
                event.prevent_default();
            }
            run(shortcut, search_input.as_ref(), &toaster);
        });
        Self { _keydown: keydown }
    }
}

fn run(shortcut: Shortcut, search_input: Option<&HtmlInputElement>, toaster: &Toaster) {
    match shortcut {
        Shortcut::FocusSearch => {
            if let Some(input) = search_input {
                let _ = input.focus();
                input.select();
            }
        },
        Shortcut::ClearSearch => {
            let Some(input) = search_input else {
                return;
            };
            if input.value().is_empty() {
                return;
            }
            input.set_value("");
            // Goes through the same debounced path as typing.
            if let Ok(event) = Event::new("input") {
                let _ = input.dispatch_event(&event);
            }
        },
        Shortcut::ShowHelp => {
            toaster.info(t::HELP);
        },
    }
}
