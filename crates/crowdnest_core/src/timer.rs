//! Delayed actions
//!
//! "Run once after T ms of inactivity, superseded by any new input before
//! it fires." The action is polled from the frame loop with the host clock,
//! so no timer thread or callback capture is involved.

/// A debounced one-shot action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayedAction {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl DelayedAction {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Arm the action relative to `now_ms`, replacing any pending deadline
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Milliseconds left before the action fires, if armed
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|deadline| deadline.saturating_sub(now_ms))
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
