// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use understory_carousel::buffer::LoopBuffer;
use understory_carousel::visibility::Projection;
use understory_carousel::{Carousel, CarouselConfig, Input};

fn looping(items_per_view: f64) -> CarouselConfig {
    CarouselConfig {
        items_per_view,
        gap: 8.0,
        looping: true,
        show_dots: true,
        mousewheel: true,
        ..CarouselConfig::default()
    }
}

fn carousel(len: usize, config: CarouselConfig) -> Carousel<u32> {
    let slides: Vec<u32> = (0..(len as u32)).collect();
    let mut carousel = Carousel::new(config);
    carousel.set_slides(&slides);
    carousel.set_container_width(1200.0);
    carousel
}

fn bench_buffer_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/buffer_rebuild");

    // Rebuilds happen on structural change only, but every one discards and
    // re-clones the whole padded sequence.
    for len in [8usize, 64, 512, 4_096] {
        let slides: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("loop", len), &slides, |b, slides| {
            let mut buffer = LoopBuffer::<u32>::new();
            b.iter(|| {
                buffer.rebuild(black_box(slides), 3.5, true);
                black_box(buffer.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("flat", len), &slides, |b, slides| {
            let mut buffer = LoopBuffer::<u32>::new();
            b.iter(|| {
                buffer.rebuild(black_box(slides), 3.5, false);
                black_box(buffer.len());
            });
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/projection");

    // Runs on every committed navigation; linear in buffer length.
    for len in [8usize, 64, 512, 4_096] {
        let slides: Vec<u32> = (0..(len as u32)).collect();
        let mut buffer = LoopBuffer::<u32>::new();
        buffer.rebuild(&slides, 2.5, true);
        group.throughput(Throughput::Elements(buffer.len() as u64));

        group.bench_with_input(BenchmarkId::new("project", len), &buffer, |b, buffer| {
            let mut projection = Projection::new();
            let mut index = 0_isize;
            b.iter(|| {
                index = (index + 1) % len as isize;
                projection.project(buffer, black_box(index), 2.5, true);
                black_box(projection.active_index());
            });
        });
    }

    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/settle");

    // One navigation eased to rest at 60 Hz, including the loop wrap.
    for jump in [1isize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("tick", jump), &jump, |b, &jump| {
            b.iter_batched(
                || carousel(32, looping(3.0)),
                |mut carousel| {
                    carousel.go_to(-jump, true);
                    let mut now = 0_u64;
                    while carousel.translate() != carousel.target_translate() {
                        now += 16;
                        black_box(carousel.tick(now));
                    }
                    carousel.step();
                    black_box(carousel.current_index());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wheel_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/wheel_stream");

    // A long trackpad flick: many small deltas, most swallowed by the cooldown.
    let deltas: Vec<Vec2> = (0..256)
        .map(|i| Vec2::new(4.0 + f64::from(i % 40), f64::from(i % 3)))
        .collect();
    group.throughput(Throughput::Elements(deltas.len() as u64));

    group.bench_function("handle_input", |b| {
        b.iter_batched(
            || carousel(16, looping(1.0)),
            |mut carousel| {
                for (i, delta) in deltas.iter().enumerate() {
                    let now = i as u64 * 8;
                    black_box(carousel.handle_input(Input::Wheel { delta: *delta }, now));
                }
                black_box(carousel.current_index());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_buffer_rebuild,
    bench_projection,
    bench_settle,
    bench_wheel_stream
);
criterion_main!(benches);
