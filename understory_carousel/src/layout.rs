// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide measurement: per-slide width, stride, and the optional peek fade mask.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Extra space reserved at the trailing edge of the viewport so the next slide
/// "peeks" into view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Peek {
    /// Absolute length in pixels.
    Pixels(f64),
    /// Percentage (`0..=100`) of the container width.
    Percent(f64),
}

impl Default for Peek {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

impl Peek {
    /// Resolves the peek to pixels for a container of the given width.
    ///
    /// Negative and non-finite results resolve to `0.0`.
    #[must_use]
    pub fn resolve(self, container_width: f64) -> f64 {
        let px = match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => pct * container_width / 100.0,
        };
        if px.is_finite() && px > 0.0 { px } else { 0.0 }
    }
}

/// How the peeked region is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PeekType {
    /// The peeked slide is truncated by the container's overflow clipping.
    #[default]
    Hard,
    /// The peeked region fades out through an opacity mask.
    Fade,
}

/// Horizontal opacity mask: fully opaque up to `fade_start`, fading linearly to
/// fully transparent at `fade_end` (both in viewport pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeMask {
    /// Viewport X where the fade begins.
    pub fade_start: f64,
    /// Viewport X where content becomes fully transparent.
    pub fade_end: f64,
}

impl FadeMask {
    /// Mask opacity at viewport X coordinate `x`, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity_at(&self, x: f64) -> f64 {
        if x <= self.fade_start {
            1.0
        } else if x >= self.fade_end {
            0.0
        } else {
            1.0 - (x - self.fade_start) / (self.fade_end - self.fade_start)
        }
    }
}

/// Result of a successful [`measure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Container width the layout was computed for.
    pub container_width: f64,
    /// Width of every slide, real or clone.
    pub slide_width: f64,
    /// Gap between adjacent slides.
    pub gap: f64,
    /// Distance between the starts of adjacent slides (`slide_width + gap`).
    pub stride: f64,
    /// Resolved peek in pixels.
    pub peek: f64,
    /// Fade mask for [`PeekType::Fade`] with a non-zero peek.
    pub mask: Option<FadeMask>,
}

/// Largest supported `items_per_view`. Larger values are capped when sizing
/// the loop buffer and rejected by measurement and attribute parsing.
pub const MAX_ITEMS_PER_VIEW: f64 = 100.0;

/// Number of whole slide positions that `items_per_view` touches.
///
/// Used both for gap accounting and for sizing the loop buffer. Always in
/// `1..=MAX_ITEMS_PER_VIEW`.
#[must_use]
pub fn whole_items(items_per_view: f64) -> usize {
    if !items_per_view.is_finite() || items_per_view <= 1.0 {
        return 1;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "capped at MAX_ITEMS_PER_VIEW; ceil() makes the cast exact"
    )]
    {
        items_per_view.min(MAX_ITEMS_PER_VIEW).ceil() as usize
    }
}

/// Derives slide width and stride from the container width and configuration.
///
/// Returns `None` when the container has not been laid out yet (zero width),
/// when `items_per_view` is not positive or exceeds [`MAX_ITEMS_PER_VIEW`],
/// or when gap and peek leave no room
/// for a slide. Callers keep their previous layout and retry on the next
/// layout pass.
#[must_use]
pub fn measure(
    container_width: f64,
    items_per_view: f64,
    gap: f64,
    peek: Peek,
    peek_type: PeekType,
) -> Option<Layout> {
    if !container_width.is_finite() || container_width <= 0.0 {
        return None;
    }
    if !items_per_view.is_finite() || items_per_view <= 0.0 || items_per_view > MAX_ITEMS_PER_VIEW
    {
        return None;
    }
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    let peek_px = peek.resolve(container_width);

    let total_gap = gap * (whole_items(items_per_view) - 1) as f64;
    let slide_width = (container_width - total_gap - peek_px) / items_per_view;
    if slide_width <= 0.0 {
        return None;
    }

    let mask = match peek_type {
        PeekType::Fade if peek_px > 0.0 => Some(FadeMask {
            fade_start: container_width - peek_px,
            fade_end: container_width,
        }),
        _ => None,
    };

    Some(Layout {
        container_width,
        slide_width,
        gap,
        stride: slide_width + gap,
        peek: peek_px,
        mask,
    })
}
