// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel gesture debouncing: turn continuous wheel/trackpad deltas into discrete steps.
//!
//! Trackpads deliver a flick as dozens of small wheel events. Paging UIs
//! (carousels, steppers, slideshows) want exactly one step per flick.
//! [`WheelGesture`] does this in three stages:
//!
//! 1. Pick the dominant axis of each delta (horizontal scroll, or a vertical
//!    wheel that the platform did not remap for shift+wheel).
//! 2. Drop deltas below a noise floor.
//! 3. Accumulate the rest until the magnitude crosses a threshold, emit one
//!    step, and ignore further input until a cooldown window has passed.
//!
//! Axis selection is a heuristic: it does not know whether the user meant to
//! scroll horizontally. Callers that can detect intent should filter deltas
//! before feeding them in.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_event_state::wheel::{WheelGesture, WheelOutcome, WheelStep};
//!
//! let mut wheel = WheelGesture::default();
//!
//! // Micro-scrolls are ignored entirely.
//! assert_eq!(wheel.on_wheel(Vec2::new(4.0, 0.0), 0), WheelOutcome::Ignored);
//!
//! // Vertical deltas count when they dominate.
//! assert_eq!(wheel.on_wheel(Vec2::new(1.0, -30.0), 10), WheelOutcome::Accumulating);
//! assert_eq!(
//!     wheel.on_wheel(Vec2::new(0.0, -30.0), 20),
//!     WheelOutcome::Step(WheelStep::Backward)
//! );
//!
//! // Cooldown swallows the tail of the gesture, then input flows again.
//! assert_eq!(wheel.on_wheel(Vec2::new(0.0, -90.0), 30), WheelOutcome::Locked);
//! assert_eq!(wheel.on_wheel(Vec2::new(0.0, -90.0), 420), WheelOutcome::Step(WheelStep::Backward));
//! ```

use kurbo::Vec2;

/// Tuning for [`WheelGesture`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Accumulated magnitude that triggers one step.
    pub threshold: f64,
    /// Deltas with a smaller magnitude on the dominant axis are dropped.
    pub noise_floor: f64,
    /// Milliseconds after a step during which further input is swallowed.
    pub cooldown_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            noise_floor: 5.0,
            cooldown_ms: 400,
        }
    }
}

/// Direction of a debounced wheel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelStep {
    /// Positive accumulated delta (right / down).
    Forward,
    /// Negative accumulated delta (left / up).
    Backward,
}

/// Result of feeding one wheel delta into a [`WheelGesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Below the noise floor; the host should let the event through.
    Ignored,
    /// Inside the cooldown window; the delta was swallowed.
    Locked,
    /// Added to the accumulator without crossing the threshold.
    Accumulating,
    /// The threshold was crossed; exactly one step should be taken.
    Step(WheelStep),
}

impl WheelOutcome {
    /// Returns `true` if the host should suppress the platform's default
    /// scroll or navigation behavior for this event.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Accumulates wheel deltas into debounced steps.
#[derive(Clone, Debug, Default)]
pub struct WheelGesture {
    config: WheelConfig,
    accumulator: f64,
    locked_until: Option<u64>,
}

impl WheelGesture {
    /// Creates a gesture tracker with the given tuning.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            locked_until: None,
        }
    }

    /// Returns the current tuning.
    #[must_use]
    pub fn config(&self) -> WheelConfig {
        self.config
    }

    /// Replaces the tuning. Accumulated state is kept.
    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config;
    }

    /// Returns the pending accumulated delta.
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns `true` if input at `now_ms` would land in the cooldown window.
    #[must_use]
    pub fn is_locked(&self, now_ms: u64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    /// Feeds one wheel delta observed at `now_ms`.
    pub fn on_wheel(&mut self, delta: Vec2, now_ms: u64) -> WheelOutcome {
        let delta = dominant_axis(delta);
        if delta.abs() < self.config.noise_floor {
            return WheelOutcome::Ignored;
        }

        if self.is_locked(now_ms) {
            return WheelOutcome::Locked;
        }
        self.locked_until = None;

        self.accumulator += delta;
        if self.accumulator.abs() < self.config.threshold {
            return WheelOutcome::Accumulating;
        }

        let step = if self.accumulator > 0.0 {
            WheelStep::Forward
        } else {
            WheelStep::Backward
        };
        self.accumulator = 0.0;
        self.locked_until = Some(now_ms.saturating_add(self.config.cooldown_ms));
        WheelOutcome::Step(step)
    }

    /// Drops accumulated input and any active cooldown.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.locked_until = None;
    }
}

/// Picks the component with the larger magnitude; ties go to the vertical axis.
fn dominant_axis(delta: Vec2) -> f64 {
    if delta.x.abs() > delta.y.abs() {
        delta.x
    } else {
        delta.y
    }
}
