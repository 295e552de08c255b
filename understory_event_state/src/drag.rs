// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored drag state: make content follow the pointer along the X axis.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and the
//!    content offset (the *anchor*) at that moment.
//! 2) On each move event, call [`DragState::update`] to get the new content offset.
//!    Tracking is 1:1 with no resistance; any bounds are the caller's business.
//! 3) End the drag with [`DragState::end`], which reports whether a drag was active.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Content is at -200px; pointer goes down at x = 100.
//! drag.start(Point::new(100.0, 20.0), -200.0);
//! assert!(drag.is_dragging());
//!
//! // Pointer moves right by 30px: content follows.
//! assert_eq!(drag.update(Point::new(130.0, 40.0)), Some(-170.0));
//!
//! // Vertical movement is ignored.
//! assert_eq!(drag.offset_x(Point::new(130.0, 400.0)), Some(30.0));
//!
//! assert!(drag.end());
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Point;

/// Tracks an anchored horizontal drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer position where the drag started.
    pub start_pos: Option<Point>,
    /// Content offset captured at drag start.
    pub anchor: f64,
}

impl DragState {
    /// Start tracking a new drag from `pos`, with content currently at `anchor`.
    ///
    /// Starting while a drag is already active replaces it.
    pub fn start(&mut self, pos: Point, anchor: f64) {
        self.start_pos = Some(pos);
        self.anchor = anchor;
    }

    /// Content offset that keeps the content under the pointer at `pos`.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&self, pos: Point) -> Option<f64> {
        self.offset_x(pos).map(|offset| self.anchor + offset)
    }

    /// Horizontal distance from the drag start to `pos`.
    pub fn offset_x(&self, pos: Point) -> Option<f64> {
        self.start_pos.map(|start| pos.x - start.x)
    }

    /// End the current drag and reset state.
    ///
    /// Returns `true` if a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.start_pos = None;
        self.anchor = 0.0;
        was_dragging
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
