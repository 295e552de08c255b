// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped easing of the track translate toward its target.
//!
//! Each reference frame (1/60 s) closes a fixed fraction, the *elasticity*, of
//! the remaining distance. Ticks that cover more or less than one reference
//! frame use the equivalent compounded fraction, so the motion looks the same
//! at 30, 60, or 144 Hz.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::position::PositionState;

/// Distance (pixels) below which the translate snaps onto its target.
pub const SETTLE_EPSILON: f64 = 0.1;

/// Default fraction of the remaining distance closed per reference frame.
pub const DEFAULT_ELASTICITY: f64 = 0.12;

/// Duration of one reference frame in milliseconds.
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Upper bound on reference frames credited to a single tick, so a host that
/// stalls does not teleport the track.
const MAX_FRAMES_PER_TICK: f64 = 4.0;

/// Outcome of one easing step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Still converging.
    Moving,
    /// Translate equals target.
    Settled,
}

/// Easing clock and damping factor.
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    elasticity: f64,
    last_tick_ms: Option<u64>,
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(DEFAULT_ELASTICITY)
    }
}

impl Motion {
    /// Creates a controller with the given elasticity, clamped into `(0, 1]`.
    ///
    /// Non-finite or non-positive values fall back to [`DEFAULT_ELASTICITY`].
    #[must_use]
    pub fn new(elasticity: f64) -> Self {
        Self {
            elasticity: sanitize_elasticity(elasticity),
            last_tick_ms: None,
        }
    }

    /// Fraction of the remaining distance closed per reference frame.
    #[must_use]
    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Changes the elasticity (same sanitizing as [`Motion::new`]).
    pub fn set_elasticity(&mut self, elasticity: f64) {
        self.elasticity = sanitize_elasticity(elasticity);
    }

    /// Reference frames elapsed since the previous tick, recording `now_ms`.
    ///
    /// The first tick after construction or [`Motion::reset_clock`] counts as
    /// one frame. Clock regressions count as zero.
    pub fn frames_at(&mut self, now_ms: u64) -> f64 {
        let frames = match self.last_tick_ms {
            None => 1.0,
            Some(last) => {
                let elapsed = now_ms.saturating_sub(last) as f64;
                (elapsed / REFERENCE_FRAME_MS).min(MAX_FRAMES_PER_TICK)
            }
        };
        self.last_tick_ms = Some(now_ms);
        frames
    }

    /// Forgets the previous tick time.
    pub fn reset_clock(&mut self) {
        self.last_tick_ms = None;
    }

    /// Fraction of the remaining distance closed over `frames` reference frames.
    #[must_use]
    pub fn blend(&self, frames: f64) -> f64 {
        if frames <= 0.0 {
            0.0
        } else if frames == 1.0 {
            self.elasticity
        } else {
            1.0 - (1.0 - self.elasticity).powf(frames)
        }
    }

    /// Advances `position` by `frames` reference frames.
    pub fn advance(&self, position: &mut PositionState, frames: f64) -> Settle {
        let diff = position.distance();
        if diff.abs() < SETTLE_EPSILON {
            position.snap();
            return Settle::Settled;
        }
        position.set_translate(position.translate() + diff * self.blend(frames));
        Settle::Moving
    }
}

fn sanitize_elasticity(elasticity: f64) -> f64 {
    if elasticity.is_finite() && elasticity > 0.0 {
        elasticity.min(1.0)
    } else {
        DEFAULT_ELASTICITY
    }
}
