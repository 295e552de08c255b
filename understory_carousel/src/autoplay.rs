// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recurring autoplay timer driven by host timestamps.

/// Default autoplay interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// A recurring deadline, polled from the animation tick.
///
/// The first deadline is armed lazily on the first [`Autoplay::poll`] after
/// [`Autoplay::start`], so starting does not need a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    interval_ms: u64,
    running: bool,
    next_due_ms: Option<u64>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl Autoplay {
    /// Creates a stopped timer. A zero interval is treated as 1 ms.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            running: false,
            next_due_ms: None,
        }
    }

    /// Interval between fires.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval; takes effect from the next armed deadline.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Returns `true` while the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)starts the timer, discarding any pending deadline.
    pub fn start(&mut self) {
        self.running = true;
        self.next_due_ms = None;
    }

    /// Stops the timer. Returns `true` if it was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        self.next_due_ms = None;
        was_running
    }

    /// Returns `true` if the timer fired at `now_ms`.
    ///
    /// Like a platform interval timer, a late poll fires once and re-arms one
    /// interval from `now_ms`; missed fires are not replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
                false
            }
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            Some(_) => false,
        }
    }
}
