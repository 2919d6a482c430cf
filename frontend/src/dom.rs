//! Thin helpers over `web-sys`: lookups, event subscriptions and timers.
//!
//! Every subscription is a value that unregisters itself on drop, so a
//! component is torn down by dropping it.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use studyguide_shared::{scroll, throttle::ThrottleGate};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

/// All elements matching `selector` that can be cast to `T`, in document
/// order. An invalid selector yields nothing.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        tracing::debug!(selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(root: &Document, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_id<T: JsCast>(root: &Document, id: &str) -> Option<T> {
    root.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// Text of the first descendant matching `selector`, empty when absent.
pub fn child_text(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

/// Existing `tag.class` element, or a new one appended to `<body>`.
pub fn ensure_body_child(doc: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    if let Some(existing) = query_one::<HtmlElement>(doc, &format!(".{class}")) {
        return Some(existing);
    }
    let element = create(doc, tag, class)?;
    let body = doc.body()?;
    if let Err(err) = body.append_child(&element) {
        tracing::warn!(class, "failed to attach element: {}", js_error_message(&err));
        return None;
    }
    Some(element)
}

pub fn create(doc: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    let element = doc.create_element(tag).ok()?.dyn_into::<HtmlElement>().ok()?;
    element.set_class_name(class);
    Some(element)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Monotonic milliseconds for throttling.
pub fn now_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_to_top() {
    scroll_window_to(0.0);
}

/// Smooth-scroll so that `element` sits `offset` pixels below the viewport
/// top.
pub fn smooth_scroll_to(element: &Element, offset: f64) {
    let top = element.get_bounding_client_rect().top();
    scroll_window_to(scroll::scroll_target(top, scroll_y(), offset));
}

fn scroll_window_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

type EventClosure = Closure<dyn FnMut(Event)>;

/// A registered DOM event handler. Dropping it removes the handler.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure: EventClosure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(event, "failed to add listener: {}", js_error_message(&err));
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Handler that runs at most once per `window_ms`.
    pub fn throttled<F>(
        target: &EventTarget,
        event: &'static str,
        window_ms: f64,
        mut handler: F,
    ) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let mut gate = ThrottleGate::new(window_ms);
        Self::new(target, event, move |_| {
            if gate.try_pass(now_ms()) {
                handler();
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Runs the latest scheduled callback once calls stop arriving for `delay_ms`.
/// Scheduling again supersedes the pending callback.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule<F: FnOnce() + 'static>(&self, callback: F) {
        // Dropping the previous timeout cancels it.
        let previous = self.pending.borrow_mut().take();
        drop(previous);
        let timeout = Timeout::new(self.delay_ms, callback);
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Fire-and-forget delayed callback.
pub fn after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, callback).forget();
}
