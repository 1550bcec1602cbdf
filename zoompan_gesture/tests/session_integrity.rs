// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `zoompan_gesture` crate.
//!
//! These drive `GestureController` with long scripted and pseudo-random
//! pointer streams and compare its session against a simple model of which
//! pointers are down.

use std::collections::BTreeSet;

use kurbo::Point;
use zoompan_gesture::{
    GestureController, GestureEvent, GestureState, PINCH_SENSITIVITY, PointerId, PointerKind,
};

/// Small deterministic generator so the stream is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn pair_distance(gestures: &GestureController) -> Option<f64> {
    let (a, b) = gestures.session()?.pair()?;
    Some((b.position - a.position).hypot())
}

#[test]
fn session_matches_model_under_random_streams() {
    for seed in 1..=20_u64 {
        let mut rng = Lcg(seed);
        let mut gestures = GestureController::new();
        // Pointers the controller accepted and that are still down.
        let mut live: BTreeSet<PointerId> = BTreeSet::new();
        let mut live_kind: Option<PointerKind> = None;
        let mut starts = 0;
        let mut ends = 0;

        for _ in 0..2_000 {
            let id = PointerId(rng.below(5));
            let kind = if rng.below(4) == 0 {
                PointerKind::Mouse
            } else {
                PointerKind::Touch
            };
            let pos = Point::new(rng.below(800) as f64, rng.below(600) as f64);

            match rng.below(4) {
                0 => {
                    let ev = gestures.pointer_down(id, kind, pos);
                    if live_kind.is_none_or(|k| k == kind) {
                        live_kind = Some(kind);
                        live.insert(id);
                    }
                    if ev == Some(GestureEvent::Start) {
                        starts += 1;
                    }
                }
                1 => {
                    let before = pair_distance(&gestures);
                    let ev = gestures.pointer_move(id, pos);
                    if !live.contains(&id) {
                        assert_eq!(ev, None, "move of an unknown pointer produced {ev:?}");
                    }
                    if let Some(GestureEvent::Pinch { scale_delta, .. }) = ev {
                        // The zoom step only reflects this move's change in spread.
                        let expected = match (before, pair_distance(&gestures)) {
                            (Some(prev), Some(now)) if prev > 0.0 => (now - prev) * PINCH_SENSITIVITY,
                            _ => 0.0,
                        };
                        assert!(
                            (scale_delta - expected).abs() < 1e-9,
                            "seed {seed}: scale_delta {scale_delta}, expected {expected}"
                        );
                    }
                }
                2 => {
                    if gestures.pointer_up(id) == Some(GestureEvent::End) {
                        ends += 1;
                    }
                    live.remove(&id);
                }
                _ => {
                    if gestures.pointer_cancel(id) == Some(GestureEvent::End) {
                        ends += 1;
                    }
                    live.remove(&id);
                }
            }
            if live.is_empty() {
                live_kind = None;
            }

            let session_ids: BTreeSet<_> = gestures
                .session()
                .map(|s| s.ids().into_iter().collect())
                .unwrap_or_default();
            assert_eq!(session_ids, live, "seed {seed}: session diverged from model");
            assert_eq!(
                gestures.state() == GestureState::Pinching,
                live.len() == 2,
                "seed {seed}: pinch state must match exactly two live pointers"
            );
            assert_eq!(gestures.is_active(), !live.is_empty());
        }
        assert!(starts - ends <= 1, "every end must pair with a start");
    }
}

#[test]
fn two_finger_zoom_then_one_finger_pan() {
    let mut g = GestureController::new();
    let (a, b) = (PointerId(10), PointerId(11));

    assert_eq!(
        g.pointer_down(a, PointerKind::Touch, Point::new(300.0, 300.0)),
        Some(GestureEvent::Start)
    );
    assert_eq!(g.pointer_down(b, PointerKind::Touch, Point::new(400.0, 300.0)), None);

    let mut total_zoom = 0.0;
    for step in 1..=10 {
        let x = 400.0 + f64::from(step) * 10.0;
        if let Some(GestureEvent::Pinch { scale_delta, .. }) = g.pointer_move(b, Point::new(x, 300.0)) {
            total_zoom += scale_delta;
        }
    }
    // Fingers spread by 100px in total.
    assert!((total_zoom - 1.0).abs() < 1e-9);

    assert_eq!(g.pointer_up(b), None);
    assert_eq!(g.state(), GestureState::Dragging);
    assert!(matches!(
        g.pointer_move(a, Point::new(310.0, 305.0)),
        Some(GestureEvent::Pan(_))
    ));
    assert_eq!(g.pointer_cancel(a), Some(GestureEvent::End));
}

#[test]
fn pinch_resumes_with_the_remaining_pair_after_third_finger_lifts() {
    let mut g = GestureController::new();
    let (a, b, c) = (PointerId(1), PointerId(2), PointerId(3));
    g.pointer_down(a, PointerKind::Touch, Point::new(100.0, 100.0));
    g.pointer_down(b, PointerKind::Touch, Point::new(200.0, 100.0));
    g.pointer_down(c, PointerKind::Touch, Point::new(700.0, 100.0));
    assert_eq!(g.state(), GestureState::Dragging);

    assert_eq!(g.pointer_cancel(b), None);
    assert_eq!(g.state(), GestureState::Pinching);
    match g.pointer_move(c, Point::new(700.0, 100.0)) {
        Some(GestureEvent::Pinch {
            translation,
            scale_delta,
            ..
        }) => {
            assert_eq!(translation, kurbo::Vec2::ZERO);
            assert!(scale_delta.abs() < 1e-12, "got {scale_delta}");
        }
        other => panic!("expected a pinch sample, got {other:?}"),
    }
}
