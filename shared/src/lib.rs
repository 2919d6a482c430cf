//! Browser-independent rules behind the exam-prep reference page.
//!
//! Everything in this crate can be exercised natively: the wasm frontend
//! reads the DOM into these types, asks them what should happen, and writes
//! the answer back.

pub mod analytics;
pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod filter;
pub mod keyboard;
pub mod lifecycle;
pub mod prefs;
pub mod scroll;
pub mod stats;
pub mod theme;
pub mod throttle;
pub mod toast;

pub use content::ContentItem;
pub use error::{ClipboardError, LifecycleError, StoreError};
pub use filter::{FilterOutcome, FilterState};
pub use prefs::{KeyValueBackend, MemoryBackend, PreferenceStore};
