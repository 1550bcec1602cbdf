// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::Axis;

/// Size and position of one scrollbar thumb, as percentages of its track.
///
/// Thumbs are derived from the current transform and geometry on every
/// change; they are never a source of truth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarThumb {
    /// Thumb length in percent of the track, in `(0, 100]`.
    pub size_percent: f64,
    /// Thumb start in percent of the track, in `[0, 100 - size_percent]`.
    pub position_percent: f64,
}

impl ScrollbarThumb {
    /// A thumb covering the whole track.
    ///
    /// Used when the geometry is too degenerate to derive a ratio from.
    pub const FULL: Self = Self {
        size_percent: 100.0,
        position_percent: 0.0,
    };

    /// Derives a thumb along one axis.
    ///
    /// - `view` is the viewport extent.
    /// - `canvas_start` is the canvas position relative to the viewport.
    /// - `area` is the fictive area extent.
    ///
    /// ```text
    /// size = view² / area
    /// pos  = (view - canvas_start - padding) / view * size
    /// ```
    #[must_use]
    pub fn along(view: f64, canvas_start: f64, area: f64, padding: f64) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(view) || !usable(area) {
            return Self::FULL;
        }
        let size = view * view / area;
        let position = (view - canvas_start - padding) / view * size;

        let size_percent = (size / view * 100.0).min(100.0);
        if !usable(size_percent) {
            return Self::FULL;
        }
        let position_percent = position / view * 100.0;
        let position_percent = if position_percent.is_finite() {
            position_percent.clamp(0.0, 100.0 - size_percent)
        } else {
            0.0
        };
        Self {
            size_percent,
            position_percent,
        }
    }
}

/// Horizontal and vertical scrollbar thumbs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrollbars {
    /// Thumb of the horizontal scrollbar.
    pub x: ScrollbarThumb,
    /// Thumb of the vertical scrollbar.
    pub y: ScrollbarThumb,
}

impl Scrollbars {
    /// Derives both thumbs from the viewport, the canvas rectangle (relative
    /// to the viewport) and the fictive area.
    #[must_use]
    pub fn compute(viewport: Rect, canvas: Rect, area: Size, padding: f64) -> Self {
        Self {
            x: ScrollbarThumb::along(viewport.width(), canvas.x0, area.width, padding),
            y: ScrollbarThumb::along(viewport.height(), canvas.y0, area.height, padding),
        }
    }

    /// Returns the thumb for `axis`.
    #[must_use]
    pub fn thumb(&self, axis: Axis) -> ScrollbarThumb {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}
