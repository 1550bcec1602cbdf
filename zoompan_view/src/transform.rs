// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Scale and translation applied to the content surface.
///
/// `offset` is the translation of the content center relative to the
/// viewport center, in viewport pixels. `scale` is a uniform factor
/// (`1.0` = content drawn at its logical size).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation from the centered position, in viewport pixels.
    pub offset: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Transform {
    /// Creates a transform from a scale and an offset.
    #[must_use]
    pub fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }
}

/// Inclusive range of allowed scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 10.0,
        }
    }
}

impl ScaleLimits {
    /// Creates a scale range.
    ///
    /// The bounds are normalized so that `min <= max`. A `NaN` bound is
    /// replaced by the default one.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let defaults = Self::default();
        let min = if min.is_nan() { defaults.min } else { min };
        let max = if max.is_nan() { defaults.max } else { max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    ///
    /// `NaN` maps to the lower bound.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min;
        }
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Returns the half-extent of the valid offset range on each axis.
///
/// With viewport size `V`, content size `C`, scale `s` and padding `p`:
///
/// ```text
/// space = V / 2 + C * s / 2 - p
/// ```
///
/// Offsets inside `[-space, space]` keep at least `p` pixels of content
/// visible. When the content is thinner than the padding allows, the space
/// collapses to zero instead of going negative.
#[must_use]
pub fn pan_envelope(viewport: Size, content: Size, scale: f64, padding: f64) -> Vec2 {
    let space_x = viewport.width / 2.0 + content.width * scale / 2.0 - padding;
    let space_y = viewport.height / 2.0 + content.height * scale / 2.0 - padding;
    Vec2::new(non_negative(space_x), non_negative(space_y))
}

/// Clamps `offset` into `[-envelope, envelope]` per axis.
#[must_use]
pub fn clamp_offset(offset: Vec2, envelope: Vec2) -> Vec2 {
    Vec2::new(
        offset.x.clamp(-envelope.x, envelope.x),
        offset.y.clamp(-envelope.y, envelope.y),
    )
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
