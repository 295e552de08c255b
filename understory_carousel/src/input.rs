// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input and the navigation commands it is funneled into.

use kurbo::{Point, Vec2};

/// Keys the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Anything else; passed through to the host.
    Other,
}

/// Raw input delivered by the host.
///
/// Mouse and touch both map onto the pointer variants; only the X coordinate
/// of a pointer position is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// Pointer pressed (mouse down or touch start) over the viewport.
    PointerDown {
        /// Pointer position in page coordinates.
        position: Point,
    },
    /// Pointer moved anywhere on the page.
    PointerMove {
        /// Pointer position in page coordinates.
        position: Point,
    },
    /// Pointer released (mouse up or touch end) anywhere on the page.
    PointerUp,
    /// Wheel or trackpad scroll over the viewport.
    Wheel {
        /// Scroll delta, in the platform's wheel units.
        delta: Vec2,
    },
    /// Key pressed while the carousel has focus.
    Key(Key),
    /// Focus moved into the slot at `buffer_position`.
    FocusIn {
        /// Buffer position of the slot containing the focused element.
        buffer_position: usize,
    },
    /// An indicator (dot) was activated.
    IndicatorClick {
        /// Real slide index of the indicator.
        index: usize,
    },
}

/// Input category, used to route input to its handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Pointer down, move, and up.
    Pointer,
    /// Wheel and trackpad scroll.
    Wheel,
    /// Keyboard.
    Keyboard,
    /// Focus traversal.
    Focus,
    /// Indicator activation.
    Indicator,
}

impl Input {
    /// Category of this input.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::PointerDown { .. } | Self::PointerMove { .. } | Self::PointerUp => {
                InputKind::Pointer
            }
            Self::Wheel { .. } => InputKind::Wheel,
            Self::Key(_) => InputKind::Keyboard,
            Self::FocusIn { .. } => InputKind::Focus,
            Self::IndicatorClick { .. } => InputKind::Indicator,
        }
    }
}

/// What the host should do with the platform default for an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResponse {
    /// Suppress the default action (scrolling, history navigation).
    PreventDefault,
    /// Let the default action run.
    AllowDefault,
}

/// Navigation request. Every input source and the public API go through these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move to a logical index.
    GoTo {
        /// Target index (clamped or wrapped by the engine).
        index: isize,
        /// Ease toward the target instead of jumping.
        animate: bool,
    },
    /// Move one slide forward.
    Next,
    /// Move one slide back.
    Prev,
}

/// Result of routing one input: the default-action decision plus an optional
/// navigation command for the engine to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Dispatch {
    pub(crate) response: InputResponse,
    pub(crate) command: Option<Command>,
}

impl Dispatch {
    pub(crate) const PASS: Self = Self {
        response: InputResponse::AllowDefault,
        command: None,
    };

    pub(crate) fn consume(command: Option<Command>) -> Self {
        Self {
            response: InputResponse::PreventDefault,
            command,
        }
    }

    pub(crate) fn pass(command: Option<Command>) -> Self {
        Self {
            response: InputResponse::AllowDefault,
            command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            Input::PointerDown {
                position: Point::ZERO
            }
            .kind(),
            InputKind::Pointer
        );
        assert_eq!(Input::PointerUp.kind(), InputKind::Pointer);
        assert_eq!(
            Input::Wheel { delta: Vec2::ZERO }.kind(),
            InputKind::Wheel
        );
        assert_eq!(Input::Key(Key::ArrowLeft).kind(), InputKind::Keyboard);
        assert_eq!(
            Input::FocusIn { buffer_position: 0 }.kind(),
            InputKind::Focus
        );
        assert_eq!(
            Input::IndicatorClick { index: 1 }.kind(),
            InputKind::Indicator
        );
    }
}
