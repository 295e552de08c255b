// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Notifications queued by the engine for page-level listeners.
///
/// Drain them with [`crate::Carousel::take_events`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A committed navigation changed the active real slide.
    IndexChanged {
        /// New active real slide.
        index: usize,
        /// Previously active real slide.
        previous: usize,
    },
    /// Autoplay reached the last slide without looping and stopped.
    AutoplayStopped,
}
