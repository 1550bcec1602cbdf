// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::{FitRounding, ScaleLimits};

/// Computes the scale reached by zooming `delta` steps from `scale`.
///
/// Zoom is exponential: `scale * e^(delta * factor)`, so each step is the
/// same relative change whatever the current scale is. The result is
/// clamped into `limits`.
#[must_use]
pub fn scale_by_delta(scale: f64, delta: f64, factor: f64, limits: ScaleLimits) -> f64 {
    limits.clamp(scale * (delta * factor).exp())
}

/// Returns the offset change that keeps `origin` stationary when the scale
/// goes from `old` to `new`.
///
/// `origin` is expressed relative to the canvas center, in viewport pixels,
/// at the old scale.
#[must_use]
pub fn anchor_shift(origin: Vec2, old: f64, new: f64) -> Vec2 {
    if old <= 0.0 || !old.is_finite() {
        return Vec2::ZERO;
    }
    let unscaled = origin / old;
    origin - unscaled * new
}

/// Computes the largest scale, at most `1.0`, at which the padded content
/// fits inside the viewport.
///
/// Returns `None` for degenerate geometry (empty viewport or a non-positive
/// padded content size).
#[must_use]
pub fn fit_scale(viewport: Size, content: Size, padding: f64, rounding: FitRounding) -> Option<f64> {
    let padded = Size::new(content.width + 2.0 * padding, content.height + 2.0 * padding);
    if viewport.width <= 0.0
        || viewport.height <= 0.0
        || padded.width <= 0.0
        || padded.height <= 0.0
    {
        return None;
    }
    let ratio = 1.0_f64
        .min(viewport.width / padded.width)
        .min(viewport.height / padded.height);
    ratio.is_finite().then(|| rounding.apply(ratio))
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{anchor_shift, fit_scale, scale_by_delta};
    use crate::{FitRounding, ScaleLimits};

    #[test]
    fn one_step_up_is_e_to_the_factor() {
        let s = scale_by_delta(1.0, 1.0, 0.2, ScaleLimits::default());
        assert!((s - 0.2_f64.exp()).abs() < 1e-12);
        assert!((s - 1.2214).abs() < 1e-4);
    }

    #[test]
    fn steps_are_relative() {
        let limits = ScaleLimits::new(1e-3, 1e3);
        let a = scale_by_delta(0.5, 1.0, 0.2, limits) / 0.5;
        let b = scale_by_delta(4.0, 1.0, 0.2, limits) / 4.0;
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn delta_is_clamped() {
        let limits = ScaleLimits::default();
        assert_eq!(scale_by_delta(9.9, 5.0, 0.2, limits), 10.0);
        assert_eq!(scale_by_delta(0.06, -5.0, 0.2, limits), 0.05);
    }

    #[test]
    fn anchor_shift_at_center_is_zero() {
        assert_eq!(anchor_shift(Vec2::ZERO, 1.0, 3.0), Vec2::ZERO);
        assert_eq!(anchor_shift(Vec2::new(10.0, 20.0), 0.0, 3.0), Vec2::ZERO);
    }

    #[test]
    fn anchor_shift_doubling() {
        // A point 100px right of center moves to 200px when doubling; the
        // offset must pull it back by 100px.
        assert_eq!(anchor_shift(Vec2::new(100.0, -50.0), 1.0, 2.0), Vec2::new(-100.0, 50.0));
    }

    #[test]
    fn fit_reference_scenario() {
        let s = fit_scale(
            Size::new(1000.0, 800.0),
            Size::new(800.0, 600.0),
            40.0,
            FitRounding::default(),
        );
        assert_eq!(s, Some(1.0));
    }

    #[test]
    fn fit_shrinks_large_content() {
        let s = fit_scale(
            Size::new(500.0, 500.0),
            Size::new(1920.0, 1080.0),
            40.0,
            FitRounding::default(),
        );
        // 500 / 2000 = 0.25, rounded to one decimal.
        assert_eq!(s, Some(0.3));
        let exact = fit_scale(
            Size::new(500.0, 500.0),
            Size::new(1920.0, 1080.0),
            40.0,
            FitRounding::Exact,
        );
        assert_eq!(exact, Some(0.25));
    }

    #[test]
    fn fit_rejects_degenerate_geometry() {
        let r = FitRounding::default();
        assert_eq!(fit_scale(Size::ZERO, Size::new(10.0, 10.0), 0.0, r), None);
        assert_eq!(fit_scale(Size::new(10.0, 10.0), Size::ZERO, 0.0, r), None);
    }
}
