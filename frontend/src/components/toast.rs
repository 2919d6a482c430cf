use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use studyguide_shared::{
    config::{TOAST_DURATION_MS, TOAST_EXIT_MS},
    toast::{Severity, ToastId, ToastQueue},
};
use web_sys::{Document, HtmlElement};

use crate::{
    config::classes,
    dom::{self, Listener},
    i18n::current::toast as t,
};

struct ToastNode {
    element: HtmlElement,
    _close: Option<Listener>,
}

struct ToastElements {
    root: HtmlElement,
    close: HtmlElement,
}

struct Inner {
    document: Document,
    container: Option<HtmlElement>,
    queue: RefCell<ToastQueue>,
    nodes: RefCell<HashMap<ToastId, ToastNode>>,
}

/// Handle to the notification stack. Cheap to clone; every clone talks to
/// the same container.
#[derive(Clone)]
pub struct Toaster {
    inner: Rc<Inner>,
}

impl Toaster {
    pub fn new(document: &Document) -> Self {
        let container = dom::ensure_body_child(document, "div", classes::TOAST_CONTAINER);
        if container.is_none() {
            tracing::debug!("toast container unavailable, notifications disabled");
        }
        Self {
            inner: Rc::new(Inner {
                document: document.clone(),
                container,
                queue: RefCell::new(ToastQueue::new()),
                nodes: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Show a banner. A non-positive `duration_ms` keeps it until closed.
    pub fn show(&self, message: &str, severity: Severity, duration_ms: i32) -> Option<ToastId> {
        let container = self.inner.container.as_ref()?;
        let (toast, ToastElements { root: element, close }) =
            self.inner
                .queue
                .borrow_mut()
                .push_attached(message, severity, duration_ms, |_| {
                    let elements = self.render(message, severity)?;
                    if let Err(err) = container.append_child(&elements.root) {
                        tracing::warn!("failed to attach toast: {}", dom::js_error_message(&err));
                        return None;
                    }
                    Some(elements)
                })?;
        tracing::debug!(
            id = %toast.id,
            live = self.inner.queue.borrow().live().len(),
            "toast shown"
        );

        let weak = Rc::downgrade(&self.inner);
        let id = toast.id;
        let close_listener = Listener::new(&close, "click", move |_| dismiss(&weak, id));
        self.inner.nodes.borrow_mut().insert(
            id,
            ToastNode {
                element,
                _close: close_listener,
            },
        );

        if let Some(delay) = toast.auto_dismiss_after() {
            let weak = Rc::downgrade(&self.inner);
            dom::after(delay, move || dismiss(&weak, id));
        }
        Some(id)
    }

    fn render(&self, message: &str, severity: Severity) -> Option<ToastElements> {
        let document = &self.inner.document;
        let root = dom::create(document, "div", &format!("toast {}", severity.class()))?;
        let icon = dom::create(document, "span", "toast-icon")?;
        icon.set_text_content(Some(severity.icon()));
        let body = dom::create(document, "div", "toast-message")?;
        body.set_text_content(Some(message));
        let close = dom::create(document, "button", "toast-close")?;
        let _ = close.set_attribute("aria-label", t::CLOSE_ARIA);
        close.set_text_content(Some(t::CLOSE_GLYPH));
        for child in [&icon, &body, &close] {
            let _ = root.append_child(child);
        }
        Some(ToastElements { root, close })
    }

    pub fn success(&self, message: &str) -> Option<ToastId> {
        self.show(message, Severity::Success, TOAST_DURATION_MS)
    }

    pub fn error(&self, message: &str) -> Option<ToastId> {
        self.show(message, Severity::Error, TOAST_DURATION_MS)
    }

    pub fn info(&self, message: &str) -> Option<ToastId> {
        self.show(message, Severity::Info, TOAST_DURATION_MS)
    }
}

/// Close a toast. Closing one that is already gone does nothing.
fn dismiss(inner: &Weak<Inner>, id: ToastId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    if inner.queue.borrow_mut().dismiss(id).is_none() {
        return;
    }
    let Some(node) = inner.nodes.borrow_mut().remove(&id) else {
        return;
    };
    dom::set_style(&node.element, "animation", "slideOutRight 0.3s ease-out");
    // The node (and its close listener, possibly the caller) is dropped only
    // once the exit animation is over.
    dom::after(TOAST_EXIT_MS, move || {
        node.element.remove();
        drop(node);
    });
}
