//! Client-side behavior of the exam-prep reference page, compiled to wasm and
//! loaded by the static HTML.

mod app;
mod components;
mod config;
mod dom;
mod i18n;
mod logging;
mod state;
mod storage;

fn main() {
    logging::init();
    wasm_bindgen_futures::spawn_local(app::App::start());
}
