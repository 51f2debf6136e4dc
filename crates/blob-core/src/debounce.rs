//! Collapse bursts of signals into one delayed action.
//!
//! The debouncer owns at most one pending task handle. Handles are expected
//! to cancel their task when dropped (as `gloo` timers do), so replacing the
//! handle on every signal restarts the quiet period.

pub struct Debouncer<H> {
    delay_ms: u32,
    pending: Option<H>,
}

impl<H> Debouncer<H> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any pending task and schedule a fresh one via `schedule(delay_ms)`.
    pub fn signal(&mut self, schedule: impl FnOnce(u32) -> H) {
        drop(self.pending.take());
        self.pending = Some(schedule(self.delay_ms));
    }

    /// Called by the task when it runs. Returns false for a task that was
    /// already cancelled, in which case the action must be skipped.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self) {
        drop(self.pending.take());
    }
}
