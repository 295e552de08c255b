// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions
//! that require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`drag`]: Track a pointer drag along one axis, anchored to the content
//!   offset captured when the drag began
//! - [`wheel`]: Turn a stream of wheel/trackpad deltas into discrete steps,
//!   with a noise floor, an accumulation threshold, and a cooldown window
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Clock-agnostic**: Timestamps are plain `u64` milliseconds supplied by the
//!   caller, so hosts decide what "now" means
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. These managers accept raw pointer positions and wheel deltas
//! and produce offsets or step decisions that applications interpret.
//!
//! ## Usage Patterns
//!
//! ### Anchored Drags
//!
//! Use [`drag::DragState`] to make content follow the pointer 1:1 from where it
//! was when the drag started:
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Content sits at -400px when the pointer goes down at x = 300.
//! drag.start(Point::new(300.0, 10.0), -400.0);
//!
//! // Pointer moves 250px to the left: content follows to -650px.
//! assert_eq!(drag.update(Point::new(50.0, 12.0)), Some(-650.0));
//! # }
//! ```
//!
//! ### Wheel Gestures
//!
//! Use [`wheel::WheelGesture`] so one fast trackpad flick advances exactly one step:
//!
//! ```rust
//! # #[cfg(feature = "wheel")]
//! # fn example() {
//! use kurbo::Vec2;
//! use understory_event_state::wheel::{WheelGesture, WheelOutcome, WheelStep};
//!
//! let mut wheel = WheelGesture::default();
//!
//! assert_eq!(wheel.on_wheel(Vec2::new(30.0, 0.0), 0), WheelOutcome::Accumulating);
//! assert_eq!(
//!     wheel.on_wheel(Vec2::new(30.0, 0.0), 16),
//!     WheelOutcome::Step(WheelStep::Forward)
//! );
//! // The rest of the flick lands inside the cooldown window.
//! assert_eq!(wheel.on_wheel(Vec2::new(80.0, 0.0), 32), WheelOutcome::Locked);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable anchored drag tracking (requires `kurbo` dependency)
//! - `wheel`: Enable wheel gesture debouncing (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "wheel")]
pub mod wheel;
