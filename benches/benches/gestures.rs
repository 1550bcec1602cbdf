// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for gesture recognition and the full engine input path.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use zoompan::{Axis, Callbacks, Config, Element, Frame, Host, ZoomPan};
use zoompan_gesture::{GestureController, PointerId, PointerKind};

/// Host that only remembers the last frame.
#[derive(Debug, Default)]
struct NullHost {
    frame: Option<Frame>,
}

impl Host for NullHost {
    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 720.0)
    }

    fn has_element(&self, _: Element) -> bool {
        true
    }

    fn track_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => 1280.0,
            Axis::Vertical => 720.0,
        }
    }

    fn apply(&mut self, frame: &Frame) {
        self.frame = Some(*frame);
    }
}

/// Two fingers spreading and then closing again, `samples` moves in total.
fn pinch_path(samples: usize) -> Vec<(PointerId, Point)> {
    (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let spread = 200.0 * (t * core::f64::consts::TAU).sin();
            if i % 2 == 0 {
                (PointerId(1), Point::new(500.0 - spread, 360.0))
            } else {
                (PointerId(2), Point::new(780.0 + spread, 360.0))
            }
        })
        .collect()
}

fn engine() -> ZoomPan<NullHost> {
    ZoomPan::new(NullHost::default(), Config::default(), Callbacks::new())
        .expect("default configuration is valid")
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/controller");
    for samples in [256_usize, 4_096] {
        let path = pinch_path(samples);
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::new("pinch", samples), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut g = GestureController::new();
                    g.pointer_down(PointerId(1), PointerKind::Touch, Point::new(500.0, 360.0));
                    g.pointer_down(PointerId(2), PointerKind::Touch, Point::new(780.0, 360.0));
                    g
                },
                |mut g| {
                    for &(id, pos) in path {
                        black_box(g.pointer_move(id, pos));
                    }
                    g
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/engine");
    for samples in [256_usize, 4_096] {
        let path = pinch_path(samples);
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::new("pinch", samples), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut zp = engine();
                    zp.pointer_down(PointerId(1), PointerKind::Touch, Point::new(500.0, 360.0));
                    zp.pointer_down(PointerId(2), PointerKind::Touch, Point::new(780.0, 360.0));
                    zp
                },
                |mut zp| {
                    for &(id, pos) in path {
                        zp.pointer_move(id, pos);
                    }
                    black_box(zp.host().frame);
                    zp
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("drag", samples), &path, |b, path| {
            b.iter_batched(
                || {
                    let mut zp = engine();
                    zp.pointer_down(PointerId(1), PointerKind::Mouse, Point::new(500.0, 360.0));
                    zp
                },
                |mut zp| {
                    for &(_, pos) in path {
                        zp.pointer_move(PointerId(1), pos);
                    }
                    black_box(zp.host().frame);
                    zp
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_controller, bench_engine);
criterion_main!(benches);
