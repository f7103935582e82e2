//! Event-rate control: per-frame coalescing and trailing-edge debounce.
//!
//! Both are plain state machines driven by caller-supplied values and
//! timestamps, so they can be exercised without a browser clock. The web
//! frontend pairs them with requestAnimationFrame and setTimeout.

/// Collapses a burst of same-frame events into one scheduled update.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
    latest: f64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the newest value. Returns true when the caller should schedule
    /// a frame callback, false while one is already pending.
    pub fn push(&mut self, value: f64) -> bool {
        self.latest = value;
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending update, yielding the most recent value.
    pub fn take(&mut self) -> f64 {
        self.pending = false;
        self.latest
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Trailing-edge debounce keyed by deadline identity: of all the timers armed
/// during a burst, only the one from the most recent trigger fires. This makes
/// correctness independent of timer jitter, since stale timers are recognized
/// by their deadline token rather than by comparing clocks.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Arm (or re-arm) the debounce window, returning the new deadline token.
    pub fn trigger(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.delay_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// True iff `deadline` is still the armed token; disarms on success.
    pub fn expire(&mut self, deadline: f64) -> bool {
        if self.deadline == Some(deadline) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
