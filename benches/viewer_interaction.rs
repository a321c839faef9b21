// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the viewer's per-event hot paths.
//!
//! Measures the performance of:
//! - Responsive sizing on window resize
//! - Pinch gesture recognition (one touch-move)
//! - A full flip cycle through the viewer component

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use menu_flipbook::document::DocumentSource;
use menu_flipbook::ui::state::{compute_size, gesture, FlipDirection, ScaleBounds};
use menu_flipbook::ui::viewer::{ManualFlipTimer, Message, Settings, Viewer};
use std::hint::black_box;
use std::time::Duration;

fn bench_compute_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_interaction");
    let viewports = [
        Size::new(375.0, 667.0),
        Size::new(600.0, 900.0),
        Size::new(1280.0, 900.0),
        Size::new(2560.0, 1440.0),
    ];

    group.bench_function("compute_size", |b| {
        b.iter(|| {
            for viewport in &viewports {
                black_box(compute_size(black_box(*viewport)));
            }
        });
    });

    group.finish();
}

/// One pinch move: distance computation, delta and clamp.
fn bench_pinch_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_interaction");

    group.bench_function("pinch_move", |b| {
        let mut state = gesture::State::new(ScaleBounds::default(), 1.0, 0.01, 0.001);
        state.handle(gesture::Message::TouchStart(vec![
            Point::ORIGIN,
            Point::new(100.0, 0.0),
        ]));
        let mut spread = 100.0;
        b.iter(|| {
            // Oscillate so the scale never pins at a bound
            spread = if spread > 150.0 { 100.0 } else { spread + 5.0 };
            black_box(state.handle(gesture::Message::TouchMove(vec![
                Point::ORIGIN,
                Point::new(spread, 0.0),
            ])));
        });
    });

    group.finish();
}

fn bench_flip_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_interaction");

    group.bench_function("flip_cycle", |b| {
        let mut viewer = Viewer::mount(
            DocumentSource::new("assets/menu/food.pdf"),
            Settings::default(),
            Some(Size::new(1280.0, 900.0)),
            ManualFlipTimer::new(),
        );
        viewer.handle(Message::DocumentLoaded { page_count: 2 });
        let mut direction = FlipDirection::Forward;

        b.iter(|| {
            viewer.handle(Message::ChangePage(direction));
            if let Some(ticket) = viewer.timer_mut().advance(Duration::from_secs(1)) {
                black_box(viewer.handle(Message::FlipElapsed(ticket)));
            }
            direction = match direction {
                FlipDirection::Forward => FlipDirection::Backward,
                FlipDirection::Backward => FlipDirection::Forward,
            };
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_size,
    bench_pinch_move,
    bench_flip_cycle
);
criterion_main!(benches);
