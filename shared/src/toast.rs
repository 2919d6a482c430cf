//! Bookkeeping for stacked notification banners.
//!
//! The frontend owns the DOM nodes; this queue decides ids, timing and
//! whether a dismissal still has anything to do.

use std::{fmt, str::FromStr};

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral message.
    #[default]
    Info,
}

impl Severity {
    /// CSS class added next to `toast`.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Glyph shown at the left of the banner.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    /// Accepts the CSS class names, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(()),
        }
    }
}

/// Identifier of a toast within one page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A queued banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Session-unique id.
    pub id: ToastId,
    /// Message text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// Lifetime in milliseconds; zero or negative means sticky.
    pub duration_ms: i32,
}

impl Toast {
    /// Delay after which the toast dismisses itself, `None` if sticky.
    pub fn auto_dismiss_after(&self) -> Option<u32> {
        u32::try_from(self.duration_ms).ok().filter(|ms| *ms > 0)
    }
}

/// Live toasts in display order.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    live: Vec<Toast>,
}

impl ToastQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast once `attach` has put it on screen.
    ///
    /// `attach` receives the toast about to be queued and returns whatever
    /// it rendered. When it fails the queue is left as it was and the id is
    /// burnt.
    pub fn push_attached<T>(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: i32,
        attach: impl FnOnce(&Toast) -> Option<T>,
    ) -> Option<(Toast, T)> {
        self.next_id += 1;
        let toast = Toast {
            id: ToastId(self.next_id),
            message: message.into(),
            severity,
            duration_ms,
        };
        let rendered = attach(&toast)?;
        self.live.push(toast.clone());
        Some((toast, rendered))
    }

    /// Remove a toast. Returns `None` when it was already dismissed, so a
    /// second close click and a late timer are both no-ops.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        let position = self.live.iter().position(|toast| toast.id == id)?;
        Some(self.live.remove(position))
    }

    /// Live toasts, oldest first.
    pub fn live(&self) -> &[Toast] {
        &self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOAST_DURATION_MS;

    fn live_ids(queue: &ToastQueue) -> Vec<ToastId> {
        queue.live().iter().map(|toast| toast.id).collect()
    }

    fn push(queue: &mut ToastQueue, message: &str, severity: Severity, duration_ms: i32) -> Toast {
        let (toast, ()) = queue
            .push_attached(message, severity, duration_ms, |_| Some(()))
            .unwrap();
        toast
    }

    #[test]
    fn toasts_stack_in_insertion_order() {
        let mut queue = ToastQueue::new();
        let first = push(&mut queue, "saved", Severity::Success, TOAST_DURATION_MS);
        let second = push(&mut queue, "oops", Severity::Error, 1000);
        assert_ne!(first.id, second.id);
        assert_eq!(live_ids(&queue), vec![first.id, second.id]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let toast = push(&mut queue, "hello", Severity::Info, TOAST_DURATION_MS);
        assert!(queue.dismiss(toast.id).is_some());
        assert!(queue.dismiss(toast.id).is_none());
        assert!(queue.live().is_empty());
    }

    #[test]
    fn dismissing_one_keeps_the_others() {
        let mut queue = ToastQueue::new();
        let a = push(&mut queue, "a", Severity::Info, TOAST_DURATION_MS);
        let b = push(&mut queue, "b", Severity::Warning, TOAST_DURATION_MS);
        queue.dismiss(a.id);
        assert_eq!(live_ids(&queue), vec![b.id]);
    }

    #[test]
    fn non_positive_duration_is_sticky() {
        let mut queue = ToastQueue::new();
        assert_eq!(push(&mut queue, "x", Severity::Info, 0).auto_dismiss_after(), None);
        assert_eq!(push(&mut queue, "x", Severity::Info, -5).auto_dismiss_after(), None);
        assert_eq!(
            push(&mut queue, "x", Severity::Info, TOAST_DURATION_MS).auto_dismiss_after(),
            Some(4000)
        );
    }

    #[test]
    fn failed_attach_leaves_nothing_live() {
        let mut queue = ToastQueue::new();
        let kept = push(&mut queue, "kept", Severity::Info, TOAST_DURATION_MS);
        let failed = queue.push_attached("lost", Severity::Error, TOAST_DURATION_MS, |_| None::<()>);
        assert!(failed.is_none());
        assert_eq!(live_ids(&queue), vec![kept.id]);

        let next = push(&mut queue, "next", Severity::Info, TOAST_DURATION_MS);
        assert_ne!(next.id, kept.id);
        assert_eq!(live_ids(&queue), vec![kept.id, next.id]);
    }

    #[test]
    fn attach_sees_the_toast_it_renders() {
        let mut queue = ToastQueue::new();
        let (toast, rendered) = queue
            .push_attached("hi", Severity::Warning, 1500, |toast| {
                Some(format!("{} {}", toast.id, toast.severity.class()))
            })
            .unwrap();
        assert_eq!(rendered, format!("{} warning", toast.id));
        assert_eq!(toast.message, "hi");
    }

    #[test]
    fn severity_styles() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Error.class(), "error");
        assert_eq!(Severity::Success.icon(), "✓");
    }

    #[test]
    fn severity_parses_class_names() {
        assert_eq!("success".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!(" Warning ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("loud".parse::<Severity>(), Err(()));
    }
}
