// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the transform model: anchored zoom and scrollbar metrics.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use zoompan_view::ZoomPanView;

fn bench_anchored_zoom(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let anchors: Vec<Point> = (0..64)
        .map(|i| Point::new(f64::from(i) * 30.0, f64::from(i % 8) * 135.0))
        .collect();

    c.bench_function("view/zoom_at_pointer", |b| {
        let mut view = ZoomPanView::new(Size::new(4000.0, 3000.0));
        view.fit(viewport);
        let mut delta = 1.0;
        b.iter(|| {
            for &at in &anchors {
                let anchor = view.anchor_for(viewport, at);
                let target = view.scale_by_delta(delta);
                black_box(view.scale_to(viewport, target, Some(anchor)));
            }
            delta = -delta;
        });
    });
}

fn bench_scrollbars(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let mut view = ZoomPanView::new(Size::new(4000.0, 3000.0));
    view.scale_to(viewport, 1.7, None);

    c.bench_function("view/scrollbars", |b| {
        b.iter(|| black_box(view.scrollbars(black_box(viewport))));
    });

    c.bench_function("view/debug_info", |b| {
        b.iter(|| black_box(view.debug_info(black_box(viewport))));
    });
}

criterion_group!(benches, bench_anchored_zoom, bench_scrollbars);
criterion_main!(benches);
