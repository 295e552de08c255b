// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the headless demos.

use understory_carousel::Carousel;

/// A simulated display clock that advances in fixed frames.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    now_ms: u64,
    frame_ms: u64,
}

impl FrameClock {
    /// Creates a clock at `0` ticking every `frame_ms` milliseconds.
    pub fn new(frame_ms: u64) -> Self {
        Self {
            now_ms: 0,
            frame_ms: frame_ms.max(1),
        }
    }

    /// A 60 Hz clock (16 ms frames).
    pub fn sixty_hz() -> Self {
        Self::new(16)
    }

    /// Current time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Advances one frame and returns the new time.
    pub fn advance(&mut self) -> u64 {
        self.now_ms += self.frame_ms;
        self.now_ms
    }

    /// Ticks `carousel` for `frames` frames, returning the last translate.
    pub fn run<K: Clone>(&mut self, carousel: &mut Carousel<K>, frames: usize) -> Option<f64> {
        let mut translate = None;
        for _ in 0..frames {
            let now = self.advance();
            translate = carousel.tick(now);
        }
        translate
    }

    /// Ticks until the track rests on its target, up to `max_frames`.
    ///
    /// Returns the number of frames ticked.
    pub fn settle<K: Clone>(&mut self, carousel: &mut Carousel<K>, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            let now = self.advance();
            carousel.tick(now);
            if carousel.translate() == carousel.target_translate() {
                // One more tick lets a pending loop wrap normalize.
                carousel.tick(self.advance());
                return frame + 2;
            }
        }
        max_frames
    }
}

/// One line describing which slides are drawn, e.g. `[B] [C] (d)`.
///
/// Visible real slides are bracketed, visible clones are parenthesized and
/// lowercased, and the active slide is starred.
pub fn describe_view(carousel: &Carousel<char>) -> String {
    let projection = carousel.projection();
    let mut out = String::new();
    for pos in projection.visible_positions() {
        let (Some(slot), Some(state)) = (carousel.buffer().slot(pos), projection.slot(pos)) else {
            continue;
        };
        if !out.is_empty() {
            out.push(' ');
        }
        let star = if state.active { "*" } else { "" };
        if slot.is_clone {
            out.push_str(&format!("({}{star})", slot.key.to_ascii_lowercase()));
        } else {
            out.push_str(&format!("[{}{star}]", slot.key));
        }
    }
    out
}

/// Renders indicator state as `o O o o`.
pub fn describe_dots(carousel: &Carousel<char>) -> String {
    carousel
        .projection()
        .indicators()
        .iter()
        .map(|active| if *active { "O" } else { "o" })
        .collect::<Vec<_>>()
        .join(" ")
}
