// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slot visibility, focusability, and indicator state.
//!
//! The projection is recomputed synchronously on every committed navigation,
//! so assistive technology sees the logical target even while the track is
//! still easing toward it.

use alloc::vec::Vec;

use crate::buffer::LoopBuffer;
use crate::position::wrap_index;

/// Tolerance on the upper bound of the in-view window.
///
/// A slot that starts inside the window by more than this counts as visible,
/// so any partially shown slide is included while float noise on an integer
/// `items_per_view` does not pull in the next slot.
pub const VISIBILITY_EPSILON: f64 = 1e-6;

/// Keyboard focusability of a slot's interactive content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotFocus {
    /// Part of the normal tab order.
    Tabbable,
    /// Removed from the tab order.
    #[default]
    Untabbable,
}

/// Host-facing state for one buffer slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotState {
    /// Inside the in-view window.
    pub visible: bool,
    /// Hidden from assistive technology (`aria-hidden`).
    pub aria_hidden: bool,
    /// Focusability of the slot's interactive content.
    pub focus: SlotFocus,
    /// Shows the active real slide, regardless of visibility.
    pub active: bool,
}

/// Output of the visibility projector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
    slots: Vec<SlotState>,
    indicators: Vec<bool>,
    active_index: Option<usize>,
}

impl Projection {
    /// Creates an empty projection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            indicators: Vec::new(),
            active_index: None,
        }
    }

    /// Recomputes slot and indicator state for `current_index`.
    ///
    /// The in-view window covers buffer positions
    /// `[clone_count + current_index, clone_count + current_index + items_per_view)`,
    /// up to [`VISIBILITY_EPSILON`] at the upper end. A slot is visible when
    /// any part of it is in the window. Visible real slots
    /// become tabbable; clones never do. Indicators are produced only when
    /// `show_indicators` is set.
    pub fn project<K>(
        &mut self,
        buffer: &LoopBuffer<K>,
        current_index: isize,
        items_per_view: f64,
        show_indicators: bool,
    ) {
        let real_count = buffer.real_count();
        let active_index = wrap_index(current_index, real_count);
        self.active_index = active_index;

        self.indicators.clear();
        if show_indicators {
            self.indicators
                .extend((0..real_count).map(|i| Some(i) == active_index));
        }

        let start = buffer.clone_count() as f64 + current_index as f64;
        let end = start + items_per_view;

        self.slots.clear();
        self.slots.extend(buffer.slots().iter().map(|slot| {
            let pos = slot.buffer_position as f64;
            let visible = pos >= start && pos < end - VISIBILITY_EPSILON;
            let focus = if visible && !slot.is_clone {
                SlotFocus::Tabbable
            } else {
                SlotFocus::Untabbable
            };
            SlotState {
                visible,
                aria_hidden: !visible,
                focus,
                active: Some(slot.real_index) == active_index,
            }
        }));
    }

    /// State of every buffer slot, in buffer order.
    #[must_use]
    pub fn slots(&self) -> &[SlotState] {
        &self.slots
    }

    /// State of the slot at `buffer_position`.
    #[must_use]
    pub fn slot(&self, buffer_position: usize) -> Option<&SlotState> {
        self.slots.get(buffer_position)
    }

    /// One flag per real slide; `true` for the active indicator.
    ///
    /// Empty when indicators are disabled.
    #[must_use]
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    /// Active real slide index, if there are any slides.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Buffer positions currently in view.
    pub fn visible_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.visible.then_some(pos))
    }
}
