//! Startup phases and the fixed component construction order.

use crate::error::LifecycleError;

/// Page lifecycle phase. Only moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Loader visible, document not parsed yet.
    #[default]
    Loading,
    /// Document parsed, components being constructed.
    Initializing,
    /// Everything wired, loader hidden.
    Ready,
}

impl Phase {
    fn next(self) -> Option<Phase> {
        match self {
            Phase::Loading => Some(Phase::Initializing),
            Phase::Initializing => Some(Phase::Ready),
            Phase::Ready => None,
        }
    }
}

/// Forward-only state machine over [`Phase`].
#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    /// Starts in [`Phase::Loading`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `to`, which must be the immediate successor of the current
    /// phase.
    pub fn advance(&mut self, to: Phase) -> Result<(), LifecycleError> {
        if self.phase.next() != Some(to) {
            return Err(LifecycleError {
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }
}

/// Group a component is constructed in. Groups run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Theme, notifications, analytics.
    Primitives,
    /// Scroll-driven chrome.
    Affordances,
    /// Everything that touches the example cards.
    Content,
    /// Shortcuts and usage stats.
    Extras,
    /// One-shot utilities.
    Utilities,
}

/// Every component the orchestrator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Light/dark switch.
    Theme,
    /// Notification container.
    Toast,
    /// Interaction log.
    Analytics,
    /// Reading progress bar.
    ProgressBar,
    /// "Back to top" button.
    ScrollToTop,
    /// Header and nav links.
    Navigation,
    /// Example filter and solution toggles.
    Examples,
    /// Reveal-on-scroll.
    ScrollAnimations,
    /// Highlight of the example in view.
    Highlighter,
    /// Global key bindings.
    Shortcuts,
    /// Visit and solved counters.
    UserStats,
    /// Copy buttons on task statements.
    Clipboard,
    /// Print button and print-time solution expansion.
    Print,
}

impl Component {
    /// Construction order. Later components may rely on earlier ones.
    pub const ORDER: [Component; 13] = [
        Component::Theme,
        Component::Toast,
        Component::Analytics,
        Component::ProgressBar,
        Component::ScrollToTop,
        Component::Navigation,
        Component::Examples,
        Component::ScrollAnimations,
        Component::Highlighter,
        Component::Shortcuts,
        Component::UserStats,
        Component::Clipboard,
        Component::Print,
    ];

    /// Group this component belongs to.
    pub fn stage(self) -> Stage {
        match self {
            Component::Theme | Component::Toast | Component::Analytics => Stage::Primitives,
            Component::ProgressBar | Component::ScrollToTop | Component::Navigation => {
                Stage::Affordances
            },
            Component::Examples | Component::ScrollAnimations | Component::Highlighter => {
                Stage::Content
            },
            Component::Shortcuts | Component::UserStats => Stage::Extras,
            Component::Clipboard | Component::Print => Stage::Utilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_forward_once() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.phase(), Phase::Loading);
        lifecycle.advance(Phase::Initializing).unwrap();
        lifecycle.advance(Phase::Ready).unwrap();
        assert_eq!(lifecycle.phase(), Phase::Ready);
    }

    #[test]
    fn rejects_skips_and_reentry() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(
            lifecycle.advance(Phase::Ready),
            Err(LifecycleError {
                from: Phase::Loading,
                to: Phase::Ready,
            })
        );
        lifecycle.advance(Phase::Initializing).unwrap();
        assert!(lifecycle.advance(Phase::Initializing).is_err());
        lifecycle.advance(Phase::Ready).unwrap();
        assert!(lifecycle.advance(Phase::Loading).is_err());
        assert_eq!(lifecycle.phase(), Phase::Ready);
    }

    #[test]
    fn order_respects_stages_and_lists_each_component_once() {
        let stages: Vec<Stage> = Component::ORDER.iter().map(|c| c.stage()).collect();
        assert!(stages.windows(2).all(|pair| pair[0] <= pair[1]));

        for (i, component) in Component::ORDER.iter().enumerate() {
            assert!(!Component::ORDER[i + 1..].contains(component));
        }
        assert_eq!(Component::ORDER[0], Component::Theme);
        assert_eq!(Component::ORDER[12], Component::Print);
    }
}
