//! Timings, thresholds and storage keys shared by every component.
//!
//! These are fixed for the page; nothing reads them from the environment.

/// Quiescence window before a search keystroke re-runs the filter.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Default lifetime of a toast notification. Zero or negative keeps it until
/// the user closes it.
pub const TOAST_DURATION_MS: i32 = 4000;

/// Length of the toast slide-out animation before the node is removed.
pub const TOAST_EXIT_MS: u32 = 300;

/// Minimum time the startup loader stays on screen.
pub const LOADER_MIN_DISPLAY_MS: u32 = 500;

/// Scroll offset past which the "back to top" button appears.
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset past which the print button appears.
pub const PRINT_BUTTON_THRESHOLD_PX: f64 = 500.0;

/// Space left above an element when smooth-scrolling to it.
pub const SCROLL_TARGET_OFFSET_PX: f64 = 100.0;

/// Throttle window of the reading progress bar.
pub const PROGRESS_THROTTLE_MS: f64 = 10.0;

/// Throttle window of the other scroll-driven handlers.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Delay before a revealed solution is scrolled into view.
pub const SOLUTION_SCROLL_DELAY_MS: u32 = 100;

/// Delay before a re-shown card gets its reveal animation back.
pub const REVEAL_RESTART_MS: u32 = 10;

/// Total duration of the statistics count-up animation.
pub const STAT_ANIMATION_MS: u32 = 2000;

/// Frame interval of the statistics count-up animation.
pub const STAT_FRAME_MS: u32 = 16;

/// `localStorage` key holding the theme string.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

/// `localStorage` key holding the preference blob.
pub const DATA_STORAGE_KEY: &str = "egeMathData";

/// Number of analytics events kept in the preference blob.
pub const MAX_ANALYTICS_EVENTS: usize = 100;

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";
