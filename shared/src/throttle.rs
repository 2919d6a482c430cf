//! Leading-edge throttle for high-frequency event handlers.

/// Lets a call through, then blocks further calls until `window_ms` has
/// elapsed. Timestamps are caller-supplied milliseconds from a monotonic
/// clock such as `performance.now()`.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    window_ms: f64,
    reopens_at: Option<f64>,
}

impl ThrottleGate {
    /// Gate with the given window.
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            reopens_at: None,
        }
    }

    /// Whether a call at `now_ms` may run. A passing call closes the gate
    /// for the next window.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        if self.reopens_at.is_some_and(|at| now_ms < at) {
            return false;
        }
        self.reopens_at = Some(now_ms + self.window_ms);
        true
    }
}
