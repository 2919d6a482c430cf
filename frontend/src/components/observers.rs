//! Viewport-intersection effects: reveal-on-scroll with the statistics
//! count-up, and highlighting of the example currently in view.

use std::{cell::Cell, rc::Rc};

use js_sys::Array;
use studyguide_shared::{
    animation::{parse_stat_value, CountUp},
    config::{STAT_ANIMATION_MS, STAT_FRAME_MS},
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    config::{classes, observers, selectors},
    dom::{self, js_error_message, set_class},
};

type EntriesClosure = Closure<dyn FnMut(Array)>;

/// An `IntersectionObserver` with its callback. Dropping it disconnects.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
}

impl ViewportObserver {
    fn observe<F>(targets: &[Element], threshold: f64, root_margin: &str, mut on_visible: F) -> Option<Self>
    where
        F: FnMut(Element) + 'static,
    {
        let callback: EntriesClosure = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target());
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!("IntersectionObserver unavailable: {}", js_error_message(&err));
                    return None;
                },
            };
        for target in targets {
            observer.observe(target);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Adds `visible` to cards as they scroll in and counts stat numbers up once.
pub fn reveal_on_scroll(targets: &[Element]) -> Option<ViewportObserver> {
    ViewportObserver::observe(
        targets,
        observers::REVEAL_THRESHOLD,
        observers::REVEAL_ROOT_MARGIN,
        |target| {
            set_class(&target, classes::VISIBLE, true);
            if target.class_list().contains(classes::STAT_CARD) {
                start_count_up(&target);
            }
        },
    )
}

fn start_count_up(card: &Element) {
    let Some(number) = card
        .query_selector(selectors::STAT_NUMBER)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if number.get_attribute("data-animated").is_some() {
        return;
    }
    let _ = number.set_attribute("data-animated", "true");
    let Some(target) = parse_stat_value(&number.text_content().unwrap_or_default()) else {
        return;
    };
    count_up_frame(number, CountUp::new(target, STAT_ANIMATION_MS, STAT_FRAME_MS));
}

fn count_up_frame(number: HtmlElement, mut frames: CountUp) {
    let Some(value) = frames.next() else {
        return;
    };
    number.set_text_content(Some(&value.to_string()));
    dom::after(STAT_FRAME_MS, move || count_up_frame(number, frames));
}

/// Keeps `highlighted` on exactly the example last scrolled into focus and
/// records its index.
pub fn highlight_active(
    examples: Rc<[HtmlElement]>,
    active: Rc<Cell<Option<usize>>>,
) -> Option<ViewportObserver> {
    let targets: Vec<Element> = examples.iter().map(|el| Element::clone(el)).collect();
    ViewportObserver::observe(
        &targets,
        observers::HIGHLIGHT_THRESHOLD,
        observers::HIGHLIGHT_ROOT_MARGIN,
        move |target| {
            for example in examples.iter() {
                set_class(example, classes::HIGHLIGHTED, false);
            }
            set_class(&target, classes::HIGHLIGHTED, true);
            let index = examples
                .iter()
                .position(|example| example.is_same_node(Some(&*target)));
            active.set(index);
        },
    )
}
