use studyguide_shared::ClipboardError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::{
    components::toast::Toaster,
    config::{classes, selectors},
    dom::{self, js_error_message, Listener},
    i18n::current::clipboard as t,
};

const COPY_BUTTON_STYLE: &str = "position: absolute; top: 10px; right: 10px; \
    background: var(--primary-color); color: white; border: none; border-radius: 6px; \
    padding: 5px 10px; cursor: pointer; font-size: 16px; opacity: 0; transition: opacity 0.3s;";

/// Write `text` through `navigator.clipboard.writeText`.
///
/// Looked up dynamically so pages served without a secure context (where
/// the API is missing) fail softly.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = dom::window().ok_or(ClipboardError::Unsupported)?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(ClipboardError::Unsupported)?;
    let write_fn = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .ok_or(ClipboardError::Unsupported)?;
    let promise = write_fn
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| ClipboardError::Rejected(js_error_message(&err)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ClipboardError::Unsupported)?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(js_error_message(&err)))
}

/// Copy and report the outcome as a toast.
pub fn copy_with_feedback(text: String, toaster: Toaster) {
    wasm_bindgen_futures::spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => {
                toaster.success(t::COPIED);
            },
            Err(err) => {
                tracing::error!("copy failed: {err}");
                toaster.error(t::FAILED);
            },
        }
    });
}

/// Hover-revealed copy buttons on every task statement.
pub struct CopyButtons {
    _listeners: Vec<Listener>,
}

impl CopyButtons {
    pub fn mount(document: &Document, toaster: &Toaster) -> Self {
        let mut listeners = Vec::new();
        for task in dom::query_all::<HtmlElement>(document, selectors::TASK_TEXT) {
            let Some(button) = dom::create(document, "button", classes::COPY_BUTTON) else {
                continue;
            };
            button.set_text_content(Some(t::BUTTON_GLYPH));
            button.set_title(t::BUTTON_TITLE);
            let _ = button.style().set_css_text(COPY_BUTTON_STYLE);
            dom::set_style(&task, "position", "relative");
            let _ = task.append_child(&button);

            let shown = button.clone();
            listeners.extend(Listener::new(&task, "mouseenter", move |_| {
                dom::set_style(&shown, "opacity", "1");
            }));
            let hidden = button.clone();
            listeners.extend(Listener::new(&task, "mouseleave", move |_| {
                dom::set_style(&hidden, "opacity", "0");
            }));

            let toaster = toaster.clone();
            listeners.extend(Listener::new(&button, "click", move |_| {
                let text = task
                    .text_content()
                    .unwrap_or_default()
                    .replacen(t::BUTTON_GLYPH, "", 1)
                    .trim()
                    .to_string();
                copy_with_feedback(text, toaster.clone());
            }));
        }
        Self {
            _listeners: listeners,
        }
    }
}
