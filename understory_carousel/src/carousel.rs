// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel engine: one owned state record driven by host input and ticks.

use alloc::vec::Vec;

use understory_event_state::drag::DragState;
use understory_event_state::wheel::{WheelConfig, WheelGesture, WheelOutcome, WheelStep};

use crate::autoplay::Autoplay;
use crate::buffer::LoopBuffer;
use crate::config::CarouselConfig;
use crate::error::ConfigError;
use crate::event::CarouselEvent;
use crate::input::{Command, Dispatch, Input, InputKind, InputResponse, Key};
use crate::layout::{FadeMask, Layout, measure, whole_items};
use crate::motion::{Motion, Settle};
use crate::position::{PositionState, clamp_index, nearest_index, wrap_index};
use crate::visibility::Projection;

/// Headless carousel over host slide handles `K`.
///
/// All navigation, whether it comes from the public API, pointer drags, wheel
/// gestures, keys, focus, indicators, or autoplay, is funneled through one
/// [`Command`] path, so there is exactly one authoritative position.
///
/// The host feeds:
/// - structure with [`Carousel::set_slides`] and [`Carousel::set_container_width`],
/// - input with [`Carousel::handle_input`],
/// - time with [`Carousel::tick`] once per display frame.
///
/// and reads back the translate returned by `tick`, per-slot state from
/// [`Carousel::projection`], and change notifications from
/// [`Carousel::take_events`].
#[derive(Clone, Debug)]
pub struct Carousel<K> {
    config: CarouselConfig,
    real: Vec<K>,
    buffer: LoopBuffer<K>,
    container_width: f64,
    layout: Option<Layout>,
    position: PositionState,
    motion: Motion,
    drag: DragState,
    wheel: WheelGesture,
    autoplay: Autoplay,
    paused: bool,
    projection: Projection,
    events: Vec<CarouselEvent>,
    torn_down: bool,
}

impl<K: Clone> Default for Carousel<K> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<K: Clone> Carousel<K> {
    /// Creates an engine with no slides and an unmeasured container.
    ///
    /// Autoplay starts immediately when `config.autoplay` is set; the first
    /// deadline is armed by the first [`Carousel::tick`].
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let mut carousel = Self {
            motion: Motion::new(config.elasticity),
            wheel: WheelGesture::new(wheel_config(&config)),
            autoplay: Autoplay::new(config.interval_ms),
            config,
            real: Vec::new(),
            buffer: LoopBuffer::new(),
            container_width: 0.0,
            layout: None,
            position: PositionState::new(),
            drag: DragState::default(),
            paused: false,
            projection: Projection::new(),
            events: Vec::new(),
            torn_down: false,
        };
        if carousel.config.autoplay {
            carousel.start_autoplay();
        }
        carousel
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration and re-measures.
    ///
    /// The loop buffer is rebuilt only when looping is toggled or
    /// `ceil(items_per_view)` changes. Toggling `autoplay` starts or stops the
    /// timer.
    pub fn set_config(&mut self, config: CarouselConfig) {
        let rebuild = config.looping != self.config.looping
            || whole_items(config.items_per_view) != whole_items(self.config.items_per_view);
        let autoplay_toggled = config.autoplay != self.config.autoplay;

        self.motion.set_elasticity(config.elasticity);
        self.wheel.set_config(wheel_config(&config));
        self.autoplay.set_interval(config.interval_ms);
        self.config = config;

        if rebuild {
            self.rebuild_buffer();
        }
        if autoplay_toggled {
            if self.config.autoplay {
                self.start_autoplay();
            } else {
                self.stop_autoplay();
            }
        }
        self.remeasure();
    }

    /// Applies one markup attribute change, then reconfigures.
    ///
    /// Bad values degrade to the field's default and are logged; the error is
    /// still returned so hosts can surface it. Unknown attributes change
    /// nothing.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        let result = config.set_attribute(name, value);
        match &result {
            Ok(()) => {}
            Err(ConfigError::UnknownAttribute(_)) => {
                tracing::debug!(attribute = name, "ignoring unknown carousel attribute");
                return result;
            }
            Err(err) => {
                tracing::warn!(attribute = name, %err, "carousel attribute degraded to default");
            }
        }
        self.set_config(config);
        result
    }

    /// Replaces the real slides and rebuilds the loop buffer.
    ///
    /// The current index is kept (clamped or wrapped into the new range) and
    /// re-snapped without animation.
    pub fn set_slides(&mut self, slides: &[K]) {
        self.real.clear();
        self.real.extend_from_slice(slides);
        self.rebuild_buffer();
        self.resnap();
    }

    /// Records a new container width and re-measures.
    ///
    /// A zero width (container not laid out) keeps the previous layout.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
        self.remeasure();
    }

    /// Moves to `index`: clamped without looping, wrapped with looping.
    pub fn go_to(&mut self, index: isize, animate: bool) {
        self.apply(Command::GoTo { index, animate });
    }

    /// Moves one slide forward.
    pub fn next(&mut self) {
        self.apply(Command::Next);
    }

    /// Moves one slide back.
    pub fn prev(&mut self) {
        self.apply(Command::Prev);
    }

    /// Routes one host input. `now_ms` drives the wheel cooldown.
    ///
    /// The returned [`InputResponse`] tells the host whether to suppress the
    /// platform default. Pointer input never does, so native vertical panning
    /// keeps working on touch screens.
    pub fn handle_input(&mut self, input: Input, now_ms: u64) -> InputResponse {
        let kind = input.kind();
        if !self.listens_to(kind) {
            return InputResponse::AllowDefault;
        }
        let dispatch = match kind {
            InputKind::Pointer => self.on_pointer(input),
            InputKind::Wheel => self.on_wheel(input, now_ms),
            InputKind::Keyboard => on_key(input),
            InputKind::Focus => self.on_focus(input),
            InputKind::Indicator => self.on_indicator(input),
        };
        if let Some(command) = dispatch.command {
            self.apply(command);
        }
        dispatch.response
    }

    /// Returns `true` if input of `kind` currently reaches the engine.
    ///
    /// Hosts can use this to attach platform listeners only for the kinds
    /// that matter: wheel input is ignored unless `mousewheel` is enabled,
    /// and nothing is handled after [`Carousel::teardown`].
    #[must_use]
    pub fn listens_to(&self, kind: InputKind) -> bool {
        if self.torn_down {
            return false;
        }
        match kind {
            InputKind::Wheel => self.config.mousewheel,
            InputKind::Pointer | InputKind::Keyboard | InputKind::Focus | InputKind::Indicator => {
                true
            }
        }
    }

    /// Advances the engine to `now_ms` and returns the translate to render.
    ///
    /// Returns `None` while the engine is inert (no slides, unmeasured
    /// container) or after [`Carousel::teardown`].
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if !self.is_live() {
            return None;
        }
        let frames = self.motion.frames_at(now_ms);
        if self.autoplay.poll(now_ms) {
            self.on_autoplay();
        }
        Some(self.advance(frames))
    }

    /// Advances exactly one reference frame, ignoring the clock and autoplay.
    pub fn step(&mut self) -> Option<f64> {
        if !self.is_live() {
            return None;
        }
        Some(self.advance(1.0))
    }

    /// (Re)starts autoplay. No-op while paused, dragging, or torn down.
    pub fn start_autoplay(&mut self) {
        if self.torn_down || self.paused || self.drag.is_dragging() {
            return;
        }
        self.autoplay.start();
        tracing::debug!(interval_ms = self.autoplay.interval_ms(), "autoplay started");
    }

    /// Stops autoplay.
    pub fn stop_autoplay(&mut self) {
        if self.autoplay.stop() {
            tracing::debug!("autoplay stopped");
        }
    }

    /// Host-driven pause, e.g. while the page is hidden.
    ///
    /// Resuming restarts autoplay only if it is configured.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if paused {
            self.stop_autoplay();
        } else if self.config.autoplay {
            self.start_autoplay();
        }
    }

    /// Cancels autoplay, drops drag and wheel state, and makes every later
    /// `tick` and `handle_input` inert. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.autoplay.stop();
        self.drag.end();
        self.wheel.reset();
        self.motion.reset_clock();
        self.torn_down = true;
        tracing::debug!("carousel torn down");
    }

    /// Drains queued change notifications.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        core::mem::take(&mut self.events)
    }

    /// Logical index; may be outside `0..real_count` while a loop wrap is pending.
    #[must_use]
    pub fn current_index(&self) -> isize {
        self.position.index()
    }

    /// Active real slide, if there are any slides.
    #[must_use]
    pub fn real_index(&self) -> Option<usize> {
        self.position.real_index(self.buffer.real_count())
    }

    /// Rendered translate of the track, in pixels.
    #[must_use]
    pub fn translate(&self) -> f64 {
        self.position.translate()
    }

    /// Translate the track is easing toward.
    #[must_use]
    pub fn target_translate(&self) -> f64 {
        self.position.target()
    }

    /// Last successful measurement.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Distance between adjacent slide starts; zero until measured.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |layout| layout.stride)
    }

    /// Width to give every slide; zero until measured.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |layout| layout.slide_width)
    }

    /// Opacity mask for a fading peek.
    #[must_use]
    pub fn mask(&self) -> Option<FadeMask> {
        self.layout.as_ref().and_then(|layout| layout.mask)
    }

    /// The rendered slide sequence, clones included.
    #[must_use]
    pub fn buffer(&self) -> &LoopBuffer<K> {
        &self.buffer
    }

    /// Per-slot and per-indicator state for the committed index.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Number of real slides.
    #[must_use]
    pub fn real_count(&self) -> usize {
        self.buffer.real_count()
    }

    /// Clones on each side of the real slides.
    #[must_use]
    pub fn clone_count(&self) -> usize {
        self.buffer.clone_count()
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` if the host paused autoplay.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` while the autoplay timer runs.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Returns `true` after [`Carousel::teardown`].
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Returns `true` when the engine has slides, a measured stride, and has
    /// not been torn down.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.torn_down && self.buffer.real_count() > 0 && self.stride() > 0.0
    }

    fn apply(&mut self, command: Command) {
        let current = self.position.index();
        match command {
            Command::GoTo { index, animate } => self.commit(index, animate),
            Command::Next => self.commit(current.saturating_add(1), true),
            Command::Prev => self.commit(current.saturating_sub(1), true),
        }
    }

    fn commit(&mut self, index: isize, animate: bool) {
        let real_count = self.buffer.real_count();
        if self.torn_down || real_count == 0 {
            return;
        }
        let index = if self.config.looping {
            self.loop_target(index)
        } else {
            clamp_index(index, real_count)
        };

        let previous = self.projection.active_index();
        self.position
            .go_to(index, self.buffer.clone_count(), self.stride(), animate);
        self.project();
        tracing::trace!(index, animate, target = self.position.target(), "navigate");

        if let Some((previous, index)) = previous
            .zip(self.projection.active_index())
            .filter(|(previous, index)| previous != index)
        {
            self.events
                .push(CarouselEvent::IndexChanged { index, previous });
        }
    }

    /// Keeps `index` if its whole view fits inside the clone padding,
    /// otherwise wraps it into the real range.
    fn loop_target(&self, index: isize) -> isize {
        let real_count = self.buffer.real_count();
        let clones = isize::try_from(self.buffer.clone_count()).unwrap_or(0);
        let count = isize::try_from(real_count).unwrap_or(isize::MAX);
        let whole = isize::try_from(whole_items(self.config.items_per_view)).unwrap_or(1);
        if index >= -clones && index <= count + clones - whole {
            return index;
        }
        wrap_index(index, real_count)
            .and_then(|wrapped| isize::try_from(wrapped).ok())
            .unwrap_or(0)
    }

    fn project(&mut self) {
        self.projection.project(
            &self.buffer,
            self.position.index(),
            self.config.items_per_view,
            self.config.show_dots,
        );
    }

    fn rebuild_buffer(&mut self) {
        self.buffer
            .rebuild(&self.real, self.config.items_per_view, self.config.looping);
        tracing::debug!(
            real_count = self.buffer.real_count(),
            clone_count = self.buffer.clone_count(),
            "rebuilt loop buffer"
        );
    }

    fn remeasure(&mut self) {
        let config = &self.config;
        match measure(
            self.container_width,
            config.items_per_view,
            config.gap,
            config.peek,
            config.peek_type,
        ) {
            Some(layout) => {
                tracing::debug!(
                    container_width = layout.container_width,
                    slide_width = layout.slide_width,
                    stride = layout.stride,
                    "measured carousel"
                );
                self.layout = Some(layout);
            }
            None => {
                tracing::debug!(
                    container_width = self.container_width,
                    "container not measurable; keeping previous layout"
                );
            }
        }
        self.resnap();
    }

    /// Re-places the track at the current index without animation.
    fn resnap(&mut self) {
        let real_count = self.buffer.real_count();
        if real_count == 0 {
            self.position = PositionState::new();
            self.project();
            return;
        }
        let index = if self.config.looping {
            wrap_index(self.position.index(), real_count)
                .and_then(|wrapped| isize::try_from(wrapped).ok())
                .unwrap_or(0)
        } else {
            clamp_index(self.position.index(), real_count)
        };
        self.commit(index, false);
    }

    fn advance(&mut self, frames: f64) -> f64 {
        if !self.drag.is_dragging()
            && self.motion.advance(&mut self.position, frames) == Settle::Settled
        {
            self.normalize();
        }
        self.position.translate()
    }

    /// Silent loop wrap: jumps from a clone to the real slide it mirrors.
    fn normalize(&mut self) {
        if !self.config.looping {
            return;
        }
        let index = self.position.index();
        let Some(wrapped) = wrap_index(index, self.buffer.real_count())
            .and_then(|wrapped| isize::try_from(wrapped).ok())
        else {
            return;
        };
        if wrapped != index {
            self.position
                .go_to(wrapped, self.buffer.clone_count(), self.stride(), false);
            self.project();
            tracing::trace!(from = index, to = wrapped, "loop wrap normalized");
        }
    }

    fn on_drag_end(&mut self) -> Dispatch {
        if !self.drag.end() {
            return Dispatch::PASS;
        }
        let command = nearest_index(
            self.position.translate(),
            self.buffer.clone_count(),
            self.stride(),
        )
        .map(|index| Command::GoTo {
            index,
            animate: true,
        });
        if let Some(command) = command {
            self.apply(command);
        }
        if self.config.autoplay && !self.paused {
            self.start_autoplay();
        }
        Dispatch::PASS
    }

    fn on_pointer(&mut self, input: Input) -> Dispatch {
        match input {
            Input::PointerDown { position } => {
                if self.is_live() {
                    self.stop_autoplay();
                    self.drag.start(position, self.position.translate());
                }
                Dispatch::PASS
            }
            Input::PointerMove { position } => {
                if let Some(translate) = self.drag.update(position) {
                    self.position.set_translate(translate);
                }
                Dispatch::PASS
            }
            Input::PointerUp => self.on_drag_end(),
            _ => Dispatch::PASS,
        }
    }

    fn on_wheel(&mut self, input: Input, now_ms: u64) -> Dispatch {
        let Input::Wheel { delta } = input else {
            return Dispatch::PASS;
        };
        if !self.is_live() {
            return Dispatch::PASS;
        }
        let outcome = self.wheel.on_wheel(delta, now_ms);
        if !outcome.is_consumed() {
            return Dispatch::PASS;
        }
        self.stop_autoplay();
        let command = match outcome {
            WheelOutcome::Step(WheelStep::Forward) => Some(Command::Next),
            WheelOutcome::Step(WheelStep::Backward) => Some(Command::Prev),
            WheelOutcome::Ignored | WheelOutcome::Locked | WheelOutcome::Accumulating => None,
        };
        Dispatch::consume(command)
    }

    fn on_focus(&mut self, input: Input) -> Dispatch {
        let Input::FocusIn { buffer_position } = input else {
            return Dispatch::PASS;
        };
        let Some(slot) = self.buffer.slot(buffer_position) else {
            return Dispatch::PASS;
        };
        if slot.is_clone || Some(slot.real_index) == self.real_index() {
            return Dispatch::PASS;
        }
        let index = isize::try_from(slot.real_index).unwrap_or(0);
        Dispatch::pass(Some(Command::GoTo {
            index,
            animate: true,
        }))
    }

    fn on_indicator(&mut self, input: Input) -> Dispatch {
        let Input::IndicatorClick { index } = input else {
            return Dispatch::PASS;
        };
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        self.apply(Command::GoTo {
            index,
            animate: true,
        });
        self.stop_autoplay();
        Dispatch::PASS
    }

    fn on_autoplay(&mut self) {
        let last = self.buffer.real_count().saturating_sub(1);
        let at_last = usize::try_from(self.position.index()).is_ok_and(|index| index >= last);
        if !self.config.looping && at_last {
            self.autoplay.stop();
            self.events.push(CarouselEvent::AutoplayStopped);
            tracing::debug!("autoplay reached the last slide");
        } else {
            self.apply(Command::Next);
        }
    }
}

fn on_key(input: Input) -> Dispatch {
    match input {
        Input::Key(Key::ArrowRight) => Dispatch::consume(Some(Command::Next)),
        Input::Key(Key::ArrowLeft) => Dispatch::consume(Some(Command::Prev)),
        _ => Dispatch::PASS,
    }
}

fn wheel_config(config: &CarouselConfig) -> WheelConfig {
    WheelConfig {
        threshold: config.wheel_threshold,
        cooldown_ms: config.wheel_cooldown_ms,
        ..WheelConfig::default()
    }
}
