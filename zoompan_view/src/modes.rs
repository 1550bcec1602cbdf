// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the ratio computed by [`crate::ZoomPanView::fit`] is rounded before
/// it becomes the new scale.
///
/// Rounding to one decimal place keeps fitted scales "tidy" (`0.7`, `1.0`)
/// at the cost of a small under- or overshoot relative to exact containment.
/// Use [`FitRounding::Exact`] when the content must fit to the pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitRounding {
    /// Round half away from zero to the given number of decimal places.
    Decimals(u8),
    /// Use the exact containment ratio.
    Exact,
}

impl Default for FitRounding {
    fn default() -> Self {
        Self::Decimals(1)
    }
}

impl FitRounding {
    /// Applies this rounding to a fit ratio.
    #[must_use]
    pub fn apply(self, ratio: f64) -> f64 {
        match self {
            Self::Exact => ratio,
            Self::Decimals(places) => {
                let factor = 10.0_f64.powi(i32::from(places));
                (ratio * factor).round() / factor
            }
        }
    }
}

/// One of the two screen axes.
///
/// Used to address per-axis scrollbar thumbs and scrollbar tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis; horizontal scrollbar.
    Horizontal,
    /// The Y axis; vertical scrollbar.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Picks the component of a vector along this axis.
    #[must_use]
    pub fn of(self, v: kurbo::Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Picks the extent of a size along this axis.
    #[must_use]
    pub fn extent(self, size: kurbo::Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Builds a vector with `value` on this axis and zero on the other.
    #[must_use]
    pub fn vector(self, value: f64) -> kurbo::Vec2 {
        match self {
            Self::Horizontal => kurbo::Vec2::new(value, 0.0),
            Self::Vertical => kurbo::Vec2::new(0.0, value),
        }
    }
}
