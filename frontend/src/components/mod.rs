// Page components, each owning the DOM subscriptions it registers.

pub mod clipboard;
pub mod examples;
pub mod exporter;
pub mod loading_spinner;
pub mod navigation;
pub mod observers;
pub mod print;
pub mod progress_bar;
pub mod scroll_to_top_button;
pub mod shortcuts;
pub mod theme_toggle;
pub mod toast;
pub mod user_stats;
