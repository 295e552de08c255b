// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical index and continuous translate of the carousel track.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Wraps `index` into `0..real_count` with a true (Euclidean) modulo.
///
/// Returns `None` when `real_count` is zero.
#[must_use]
pub fn wrap_index(index: isize, real_count: usize) -> Option<usize> {
    let n = isize::try_from(real_count).ok().filter(|n| *n > 0)?;
    usize::try_from(index.rem_euclid(n)).ok()
}

/// Clamps `index` into `0..real_count` (non-looping navigation).
///
/// Returns `0` when `real_count` is zero.
#[must_use]
pub fn clamp_index(index: isize, real_count: usize) -> isize {
    let last = isize::try_from(real_count).unwrap_or(isize::MAX) - 1;
    index.min(last).max(0)
}

/// Track translate (buffer space, pixels) that shows logical `index` at the
/// leading edge of the viewport.
#[must_use]
pub fn translate_for(index: isize, clone_count: usize, stride: f64) -> f64 {
    -((clone_count as f64 + index as f64) * stride)
}

/// Logical index whose resting translate is nearest to `translate`.
///
/// Returns `None` when `stride` is not positive.
#[must_use]
pub fn nearest_index(translate: f64, clone_count: usize, stride: f64) -> Option<isize> {
    if stride <= 0.0 || !translate.is_finite() {
        return None;
    }
    let relative = translate + clone_count as f64 * stride;
    let index = (-(relative / stride)).round();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is rounded and far inside isize for any real track"
    )]
    let index = index as isize;
    Some(index)
}

/// Authoritative position of the carousel.
///
/// `index` lives in real-slide space and may transiently leave
/// `0..real_count` in loop mode until the motion settles and the index is
/// wrapped. `translate` is what the host renders; `target` is where the
/// motion controller is easing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionState {
    index: isize,
    translate: f64,
    target: f64,
}

impl PositionState {
    /// Creates a position at index 0 with zero translate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: 0,
            translate: 0.0,
            target: 0.0,
        }
    }

    /// Logical index (may be out of range while a loop wrap is pending).
    #[must_use]
    pub fn index(&self) -> isize {
        self.index
    }

    /// Current rendered translate.
    #[must_use]
    pub fn translate(&self) -> f64 {
        self.translate
    }

    /// Translate the motion controller is easing toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Real slide index for the logical index.
    #[must_use]
    pub fn real_index(&self, real_count: usize) -> Option<usize> {
        wrap_index(self.index, real_count)
    }

    /// Remaining distance between target and translate.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.target - self.translate
    }

    /// Moves to `index`.
    ///
    /// With `animate` only the target moves; otherwise translate jumps there
    /// too. The caller is responsible for clamping or wrapping `index`.
    pub fn go_to(&mut self, index: isize, clone_count: usize, stride: f64, animate: bool) {
        self.index = index;
        self.target = translate_for(index, clone_count, stride);
        if !animate {
            self.translate = self.target;
        }
    }

    /// Overrides the rendered translate (drag tracking, easing steps).
    pub fn set_translate(&mut self, translate: f64) {
        self.translate = translate;
    }

    /// Snaps translate onto the target.
    pub fn snap(&mut self) {
        self.translate = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_is_true_modulo() {
        assert_eq!(wrap_index(0, 5), Some(0));
        assert_eq!(wrap_index(5, 5), Some(0));
        assert_eq!(wrap_index(7, 5), Some(2));
        assert_eq!(wrap_index(-1, 5), Some(4));
        assert_eq!(wrap_index(-6, 5), Some(4));
        assert_eq!(wrap_index(3, 0), None);
    }

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(2, 5), 2);
        assert_eq!(clamp_index(9, 5), 4);
        assert_eq!(clamp_index(9, 0), 0);
    }

    #[test]
    fn translate_accounts_for_leading_clones() {
        assert_eq!(translate_for(0, 0, 200.0), 0.0);
        assert_eq!(translate_for(2, 0, 200.0), -400.0);
        assert_eq!(translate_for(2, 3, 100.0), -500.0);
        assert_eq!(translate_for(-1, 3, 100.0), -200.0);
    }

    #[test]
    fn nearest_index_rounds() {
        // Index 2 at -400 dragged left by 250.
        assert_eq!(nearest_index(-650.0, 0, 200.0), Some(3));
        // Dragged right by 90: stays on 2.
        assert_eq!(nearest_index(-310.0, 0, 200.0), Some(2));
        // Past the leading edge in loop mode.
        assert_eq!(nearest_index(-180.0, 3, 100.0), Some(-1));
        assert_eq!(nearest_index(-180.0, 3, 0.0), None);
    }

    #[test]
    fn go_to_animated_moves_target_only() {
        let mut pos = PositionState::new();
        pos.go_to(3, 0, 100.0, true);
        assert_eq!(pos.index(), 3);
        assert_eq!(pos.target(), -300.0);
        assert_eq!(pos.translate(), 0.0);
        assert_eq!(pos.distance(), -300.0);

        pos.snap();
        assert_eq!(pos.translate(), -300.0);
    }

    #[test]
    fn go_to_immediate_moves_both() {
        let mut pos = PositionState::new();
        pos.go_to(1, 2, 50.0, false);
        assert_eq!(pos.translate(), -150.0);
        assert_eq!(pos.target(), -150.0);
        assert_eq!(pos.real_index(4), Some(1));
    }
}
