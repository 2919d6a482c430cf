//! Startup orchestration: loader, lifecycle phases, construction order and
//! the developer console surface.

use std::{cell::RefCell, rc::Rc};

use chrono::Utc;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::json;
use studyguide_shared::{
    analytics::Analytics,
    config::{LOADER_MIN_DISPLAY_MS, TOAST_DURATION_MS},
    lifecycle::{Component, Lifecycle, Phase},
    toast::Severity,
    ContentItem, PreferenceStore,
};
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{Document, Element, Window};

use crate::{
    components::{
        clipboard::CopyButtons,
        examples::ExamplesManager,
        exporter,
        loading_spinner::Loader,
        navigation::NavigationManager,
        observers::{self, ViewportObserver},
        print::PrintManager,
        progress_bar::ProgressBar,
        scroll_to_top_button::ScrollToTop,
        shortcuts::KeyboardShortcuts,
        theme_toggle::ThemeManager,
        toast::Toaster,
        user_stats::{PageStats, StatsTracker},
    },
    config::{selectors, CONSOLE_GLOBAL},
    dom::{self, Listener},
    i18n::current::console as t,
    state::{AppState, PageAnchors},
    storage::LocalStorage,
};

pub type PageAnalytics = Analytics<LocalStorage>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Everything the orchestrator builds, in construction order. A component
/// whose anchor is missing from the page stays `None`.
#[derive(Default)]
struct Components {
    _theme: Option<ThemeManager>,
    toaster: Option<Toaster>,
    analytics: Option<Rc<PageAnalytics>>,
    _progress_bar: Option<ProgressBar>,
    _scroll_to_top: Option<ScrollToTop>,
    _navigation: Option<NavigationManager>,
    examples: Option<ExamplesManager>,
    _scroll_animations: Option<ViewportObserver>,
    _highlighter: Option<ViewportObserver>,
    _shortcuts: Option<KeyboardShortcuts>,
    user_stats: Option<StatsTracker>,
    _clipboard: Option<CopyButtons>,
    _print: Option<PrintManager>,
}

impl Components {
    fn build(window: &Window, anchors: &PageAnchors, state: &AppState) -> Self {
        let document = &anchors.document;
        let mut built = Self::default();
        for component in Component::ORDER {
            match component {
                Component::Theme => {
                    built._theme = Some(ThemeManager::mount(
                        document,
                        anchors.nav.as_ref(),
                        state.theme.clone(),
                    ));
                },
                Component::Toast => built.toaster = Some(Toaster::new(document)),
                Component::Analytics => {
                    let store = PreferenceStore::with_default_namespace(LocalStorage);
                    built.analytics = Some(Rc::new(Analytics::new(store)));
                },
                Component::ProgressBar => built._progress_bar = ProgressBar::mount(document, window),
                Component::ScrollToTop => built._scroll_to_top = ScrollToTop::mount(document, window),
                Component::Navigation => {
                    built._navigation =
                        Some(NavigationManager::mount(document, window, anchors.header.as_ref()));
                },
                Component::Examples => {
                    built.examples = Some(ExamplesManager::mount(
                        document,
                        anchors.examples.clone(),
                        &anchors.toggle_buttons,
                        anchors.filter_select.clone(),
                        anchors.search_input.clone(),
                        anchors.controls.as_ref(),
                        state.filter.clone(),
                    ));
                },
                Component::ScrollAnimations => {
                    let targets: Vec<Element> = dom::query_all(document, selectors::REVEAL_TARGETS);
                    built._scroll_animations = observers::reveal_on_scroll(&targets);
                },
                Component::Highlighter => {
                    built._highlighter = observers::highlight_active(
                        anchors.examples.clone(),
                        state.active_example.clone(),
                    );
                },
                Component::Shortcuts => {
                    let toaster = built.toaster(document);
                    built._shortcuts = Some(KeyboardShortcuts::mount(
                        document,
                        anchors.search_input.clone(),
                        toaster,
                    ));
                },
                Component::UserStats => {
                    built.user_stats = Some(StatsTracker::mount(&anchors.toggle_buttons));
                },
                Component::Clipboard => {
                    let toaster = built.toaster(document);
                    built._clipboard = Some(CopyButtons::mount(document, &toaster));
                },
                Component::Print => built._print = Some(PrintManager::mount(document, window)),
            }
            tracing::debug!(?component, stage = ?component.stage(), "component initialised");
        }
        built
    }

    fn toaster(&mut self, document: &Document) -> Toaster {
        self.toaster
            .get_or_insert_with(|| Toaster::new(document))
            .clone()
    }

    fn analytics(&mut self) -> Rc<PageAnalytics> {
        self.analytics
            .get_or_insert_with(|| {
                Rc::new(Analytics::new(PreferenceStore::with_default_namespace(LocalStorage)))
            })
            .clone()
    }

    fn items(&self) -> Rc<[ContentItem]> {
        self.examples
            .as_ref()
            .map(ExamplesManager::items)
            .unwrap_or_else(|| Rc::from(Vec::new()))
    }
}

type ConsoleClosure = Closure<dyn FnMut() -> JsValue>;
type ToastClosure = Closure<dyn FnMut(JsValue, JsValue) -> JsValue>;

/// Callbacks reachable from `window.EGE_APP`, kept alive with the app.
#[derive(Default)]
struct ConsoleApi {
    _calls: Vec<ConsoleClosure>,
    _toast: Option<ToastClosure>,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|text| js_sys::JSON::parse(&text).ok())
        .unwrap_or(JsValue::UNDEFINED)
}

/// The running page.
pub struct App {
    lifecycle: Lifecycle,
    state: AppState,
    loader: Loader,
    components: Components,
    _console: ConsoleApi,
}

impl App {
    /// Run the startup sequence and keep the app alive for the page lifetime.
    pub async fn start() {
        let Some(window) = dom::window() else {
            tracing::error!("no global window, nothing to do");
            return;
        };
        let Some(document) = window.document() else {
            tracing::error!("window has no document, nothing to do");
            return;
        };

        let loader = Loader::new(&document);
        loader.show();
        let mut lifecycle = Lifecycle::new();

        document_ready(&document).await;
        advance(&mut lifecycle, Phase::Initializing);

        let state = AppState::default();
        let anchors = PageAnchors::resolve(document.clone());
        let components = Components::build(&window, &anchors, &state);
        let mut app = App {
            lifecycle,
            state,
            loader,
            components,
            _console: ConsoleApi::default(),
        };
        app.install_console(&window, &document);
        tracing::info!("{}", t::BANNER);

        TimeoutFuture::new(LOADER_MIN_DISPLAY_MS).await;
        app.loader.hide();
        advance(&mut app.lifecycle, Phase::Ready);

        let page = window.location().pathname().unwrap_or_default();
        let url = window.location().href().unwrap_or_default();
        app.components
            .analytics()
            .track("page_load", json!({ "page": page }), &url, Utc::now());
        tracing::info!(
            filter = ?app.state.filter.borrow(),
            theme = %app.state.theme.get(),
            "page ready"
        );

        APP.with(|slot| *slot.borrow_mut() = Some(app));
    }

    /// Drop the running app, unregistering every listener and observer.
    pub fn teardown() {
        // Deferred so the console closure that asked for it is not freed
        // while it is still on the stack.
        dom::after(0, || {
            let app = APP.with(|slot| slot.borrow_mut().take());
            if let Some(app) = app {
                if let Some(window) = dom::window() {
                    let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(CONSOLE_GLOBAL));
                }
                tracing::info!(phase = ?app.lifecycle.phase(), "app torn down");
                drop(app);
            }
        });
    }

    fn install_console(&mut self, window: &Window, document: &Document) {
        let api = js_sys::Object::new();
        let toaster = self.components.toaster(document);
        let analytics = self.components.analytics();
        let stats: Option<Rc<PageStats>> = self.components.user_stats.as_ref().map(StatsTracker::stats);
        let items = self.components.items();
        let state = self.state.clone();

        let export: ConsoleClosure = {
            let document = document.clone();
            let toaster = toaster.clone();
            Closure::wrap(Box::new(move || {
                exporter::export_to_json(&document, &items, &toaster);
                JsValue::UNDEFINED
            }) as Box<dyn FnMut() -> JsValue>)
        };
        let stats: ConsoleClosure = Closure::wrap(Box::new(move || {
            stats
                .as_ref()
                .map(|stats| to_js(&stats.summary()))
                .unwrap_or(JsValue::UNDEFINED)
        }) as Box<dyn FnMut() -> JsValue>);
        let events: ConsoleClosure =
            Closure::wrap(Box::new(move || to_js(&analytics.events())) as Box<dyn FnMut() -> JsValue>);
        let snapshot: ConsoleClosure =
            Closure::wrap(Box::new(move || to_js(&state.snapshot())) as Box<dyn FnMut() -> JsValue>);
        let toast: ToastClosure = Closure::wrap(Box::new(move |message: JsValue, severity: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let severity = severity
                .as_string()
                .and_then(|name| name.parse::<Severity>().ok())
                .unwrap_or_default();
            toaster
                .show(&message, severity, TOAST_DURATION_MS)
                .map(|id| JsValue::from_str(&id.to_string()))
                .unwrap_or(JsValue::UNDEFINED)
        }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);
        let teardown: ConsoleClosure = Closure::wrap(Box::new(|| {
            App::teardown();
            JsValue::UNDEFINED
        }) as Box<dyn FnMut() -> JsValue>);

        for (name, closure) in [
            ("exportToJSON", &export),
            ("stats", &stats),
            ("events", &events),
            ("state", &snapshot),
            ("teardown", &teardown),
        ] {
            let _ = js_sys::Reflect::set(&api, &JsValue::from_str(name), closure.as_ref());
        }
        let _ = js_sys::Reflect::set(&api, &JsValue::from_str("toast"), toast.as_ref());
        if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(CONSOLE_GLOBAL), &api) {
            tracing::warn!("failed to expose console API: {}", dom::js_error_message(&err));
        }
        self._console = ConsoleApi {
            _calls: vec![export, stats, events, snapshot, teardown],
            _toast: Some(toast),
        };
    }
}

fn advance(lifecycle: &mut Lifecycle, to: Phase) {
    match lifecycle.advance(to) {
        Ok(()) => tracing::debug!(phase = ?to, "lifecycle advanced"),
        Err(err) => tracing::error!("{err}"),
    }
}

/// Resolves once the document has been parsed.
async fn document_ready(document: &Document) {
    let ready_state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());
    if ready_state.as_deref() != Some("loading") {
        return;
    }
    let (sender, receiver) = oneshot::channel::<()>();
    let mut sender = Some(sender);
    let _listener = Listener::new(document, "DOMContentLoaded", move |_| {
        if let Some(sender) = sender.take() {
            let _ = sender.send(());
        }
    });
    // A listener that failed to register drops the sender, which also ends
    // the wait.
    let _ = receiver.await;
}
