// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel walkthrough.
//!
//! Drive a looping carousel with keys, a drag, a wheel flick, focus, and
//! autoplay on a simulated 60 Hz clock, printing what a host would render.
//!
//! Run:
//! - `cargo run -p understory_demos --example headless_carousel`

use kurbo::{Point, Vec2};
use understory_carousel::{Carousel, CarouselConfig, Input, Key};
use understory_demos::{FrameClock, describe_dots, describe_view};

fn report(label: &str, carousel: &mut Carousel<char>) {
    println!(
        "{label:<22} index={:>2} real={:?} translate={:>8.1}  {}  {}",
        carousel.current_index(),
        carousel.real_index(),
        carousel.translate(),
        describe_view(carousel),
        describe_dots(carousel),
    );
    for event in carousel.take_events() {
        println!("{:<22} event: {event:?}", "");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let config = CarouselConfig::from_attributes([
        ("items-per-view", "2.5"),
        ("gap", "12px"),
        ("loop", ""),
        ("show-dots", ""),
        ("mousewheel", ""),
        ("peek", "10%"),
        ("peek-type", "fade"),
        ("interval", "1200"),
    ]);
    let mut carousel = Carousel::new(config);
    carousel.set_slides(&['A', 'B', 'C', 'D', 'E']);
    carousel.set_container_width(960.0);

    let mut clock = FrameClock::sixty_hz();
    println!(
        "slide width {:.1}px, stride {:.1}px, {} clones per side, mask {:?}",
        carousel.slide_width(),
        carousel.stride(),
        carousel.clone_count(),
        carousel.mask(),
    );
    report("initial", &mut carousel);

    carousel.handle_input(Input::Key(Key::ArrowLeft), clock.now());
    report("arrow left", &mut carousel);
    let frames = clock.settle(&mut carousel, 600);
    report(&format!("settled ({frames} frames)"), &mut carousel);

    // Drag 1.4 slides to the left and let go.
    let stride = carousel.stride();
    carousel.handle_input(
        Input::PointerDown {
            position: Point::new(600.0, 80.0),
        },
        clock.now(),
    );
    for step in 1..=14 {
        let x = 600.0 - stride * 0.1 * f64::from(step);
        carousel.handle_input(
            Input::PointerMove {
                position: Point::new(x, 82.0),
            },
            clock.advance(),
        );
        clock.run(&mut carousel, 1);
    }
    carousel.handle_input(Input::PointerUp, clock.now());
    report("drag released", &mut carousel);
    clock.settle(&mut carousel, 600);
    report("settled", &mut carousel);

    // One trackpad flick: many deltas, one step.
    for _ in 0..12 {
        carousel.handle_input(
            Input::Wheel {
                delta: Vec2::new(18.0, 2.0),
            },
            clock.advance(),
        );
    }
    report("wheel flick", &mut carousel);
    clock.settle(&mut carousel, 600);

    // Assistive technology tabs into the last real slide.
    let position = carousel.buffer().buffer_position_of(4).unwrap_or_default();
    carousel.handle_input(
        Input::FocusIn {
            buffer_position: position,
        },
        clock.now(),
    );
    report("focus slide E", &mut carousel);
    clock.settle(&mut carousel, 600);

    carousel.set_attribute("autoplay", Some("")).ok();
    for _ in 0..3 {
        clock.run(&mut carousel, 80);
        report("autoplay", &mut carousel);
    }

    carousel.teardown();
    println!("after teardown tick -> {:?}", carousel.tick(clock.advance()));
}
