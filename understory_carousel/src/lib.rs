// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, input-unified carousel engine.
//!
//! The engine owns the state of one carousel (which slide is active, where the
//! track is drawn, whether autoplay runs) and leaves rendering to the host.
//! It is built from small parts that can also be used on their own:
//!
//! - [`layout`]: slide width, stride, and peek mask from the container width.
//! - [`buffer`]: the rendered slide sequence, padded with clones for looping.
//! - [`position`]: logical index and continuous track translate.
//! - [`motion`]: frame-rate independent easing toward the target translate.
//! - [`autoplay`]: a recurring deadline driven by host timestamps.
//! - [`visibility`]: per-slot visibility, focusability, and indicator state.
//! - [`config`]: configuration and declarative attribute parsing.
//!
//! [`Carousel`] ties them together. Every input source (drag, wheel, keys,
//! focus, indicators, autoplay, and the public [`Carousel::go_to`],
//! [`Carousel::next`], [`Carousel::prev`]) is reduced to one [`Command`] and
//! applied on a single path.
//!
//! ## Driving a carousel
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, Input, InputResponse, Key};
//!
//! let mut carousel = Carousel::new(CarouselConfig {
//!     items_per_view: 2.0,
//!     gap: 10.0,
//!     ..CarouselConfig::default()
//! });
//! carousel.set_slides(&["a", "b", "c", "d"]);
//! carousel.set_container_width(410.0);
//!
//! // Two slides of 200px with a 10px gap.
//! assert_eq!(carousel.slide_width(), 200.0);
//! assert_eq!(carousel.stride(), 210.0);
//!
//! // Arrow keys navigate and suppress page scrolling.
//! let response = carousel.handle_input(Input::Key(Key::ArrowRight), 0);
//! assert_eq!(response, InputResponse::PreventDefault);
//! assert_eq!(carousel.real_index(), Some(1));
//!
//! // Accessibility state follows the target immediately.
//! let visible: Vec<_> = carousel.projection().visible_positions().collect();
//! assert_eq!(visible, [1, 2]);
//!
//! // The track eases there over a few frames.
//! let mut now = 0;
//! while carousel.translate() != carousel.target_translate() {
//!     now += 16;
//!     carousel.tick(now);
//! }
//! assert_eq!(carousel.translate(), -210.0);
//!
//! assert_eq!(
//!     carousel.take_events(),
//!     [CarouselEvent::IndexChanged { index: 1, previous: 0 }]
//! );
//! ```
//!
//! ## Time
//!
//! The engine never reads a clock. Hosts pass monotonic millisecond
//! timestamps to [`Carousel::tick`] and [`Carousel::handle_input`]; easing,
//! wheel cooldown, and autoplay are all derived from them.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod autoplay;
pub mod buffer;
pub mod config;
pub mod layout;
pub mod motion;
pub mod position;
pub mod visibility;

mod carousel;
mod error;
mod event;
mod input;

pub use carousel::Carousel;
pub use config::{Attribute, CarouselConfig};
pub use error::ConfigError;
pub use event::CarouselEvent;
pub use input::{Command, Input, InputKind, InputResponse, Key};
pub use layout::{FadeMask, Layout, Peek, PeekType};
pub use visibility::{Projection, SlotFocus, SlotState};
