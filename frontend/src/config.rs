/// Selectors and class names of the static page markup.
///
/// Timings and storage keys live in `studyguide_shared::config`.
pub mod selectors {
    pub const NAV: &str = "nav";
    pub const HEADER: &str = "header";
    pub const NAV_LINK: &str = ".nav-link";
    pub const EXAMPLE: &str = ".example";
    pub const EXAMPLE_TITLE: &str = "h3";
    pub const TASK_TEXT: &str = ".task-text";
    pub const SOLUTION: &str = ".solution";
    pub const TOGGLE_BUTTON: &str = ".toggle-btn";
    pub const CONTROLS: &str = ".controls";
    pub const RESULTS_COUNT: &str = ".results-count";
    pub const REVEAL_TARGETS: &str = ".example, .stat-card";
    pub const STAT_NUMBER: &str = "h3";
    pub const TYPE_FILTER_ID: &str = "typeFilter";
    pub const SEARCH_BOX_ID: &str = "searchBox";
}

/// CSS classes toggled by the components.
pub mod classes {
    pub const VISIBLE: &str = "visible";
    pub const HIDDEN: &str = "hidden";
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const HIGHLIGHTED: &str = "highlighted";
    pub const STAT_CARD: &str = "stat-card";
    pub const TOAST_CONTAINER: &str = "toast-container";
    pub const LOADER: &str = "loader";
    pub const PROGRESS_BAR: &str = "progress-bar";
    pub const SCROLL_TO_TOP: &str = "scroll-to-top";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const COPY_BUTTON: &str = "copy-button";
    pub const PRINT_BUTTON: &str = "print-button";
    pub const RESULTS_COUNT: &str = "results-count";
}

/// Intersection observer tuning.
pub mod observers {
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    pub const HIGHLIGHT_THRESHOLD: f64 = 0.5;
    pub const HIGHLIGHT_ROOT_MARGIN: &str = "-100px 0px -100px 0px";
}

/// Name of the developer console object on `window`.
pub const CONSOLE_GLOBAL: &str = "EGE_APP";
