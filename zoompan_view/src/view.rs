// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::{area_size, canvas_rect};
use crate::modes::FitRounding;
use crate::scrollbar::Scrollbars;
use crate::transform::{ScaleLimits, Transform, clamp_offset, pan_envelope};
use crate::zoom::{anchor_shift, fit_scale, scale_by_delta};

/// Pan/zoom state for a fixed-size content surface inside a viewport.
///
/// `ZoomPanView` owns the content size and the [`Transform`] and enforces
/// the transform invariants:
/// - the scale always lies inside the configured [`ScaleLimits`];
/// - the offset always lies inside the pan envelope for the current scale,
///   so at least `padding` pixels of content stay visible on each axis.
///
/// The viewport is **not** stored. Every operation that depends on it takes
/// the current viewport rectangle as an argument, so callers re-query their
/// layout instead of reading a stale copy.
#[derive(Clone, Debug)]
pub struct ZoomPanView {
    content: Size,
    transform: Transform,
    limits: ScaleLimits,
    scale_factor: f64,
    padding: f64,
    fit_rounding: FitRounding,
}

impl ZoomPanView {
    /// Creates a view over content of the given logical size.
    ///
    /// - Initial scale is `1.0` and the content is centered.
    /// - Scale is limited to `[0.05, 10]`, zoom steps use a factor of `0.2`.
    /// - At least `40` pixels of content stay visible when panning.
    #[must_use]
    pub fn new(content: Size) -> Self {
        Self {
            content,
            transform: Transform::default(),
            limits: ScaleLimits::default(),
            scale_factor: 0.2,
            padding: 40.0,
            fit_rounding: FitRounding::default(),
        }
    }

    /// Returns the logical content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Sets the logical content size.
    ///
    /// Negative or non-finite extents are treated as zero. The offset is
    /// re-clamped against `viewport`.
    pub fn set_content(&mut self, viewport: Rect, content: Size) {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.content = Size::new(sanitize(content.width), sanitize(content.height));
        self.reclamp(viewport);
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset
    }

    /// Returns the scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Sets the scale limits and clamps the current scale into them.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        self.transform.scale = limits.clamp(self.transform.scale);
    }

    /// Returns the exponential zoom factor used by [`ZoomPanView::scale_by_delta`].
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sets the exponential zoom factor.
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Returns the minimum number of content pixels kept visible per axis.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Sets the minimum number of content pixels kept visible per axis.
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
    }

    /// Returns how fitted scales are rounded.
    #[must_use]
    pub fn fit_rounding(&self) -> FitRounding {
        self.fit_rounding
    }

    /// Sets how fitted scales are rounded.
    pub fn set_fit_rounding(&mut self, rounding: FitRounding) {
        self.fit_rounding = rounding;
    }

    /// Returns the scaled content rectangle, relative to the viewport origin.
    #[must_use]
    pub fn canvas(&self, viewport: Rect) -> Rect {
        canvas_rect(viewport, self.content, self.transform)
    }

    /// Returns the fictive area used to size scrollbars.
    #[must_use]
    pub fn area(&self, viewport: Rect) -> Size {
        area_size(viewport, self.canvas(viewport), self.padding)
    }

    /// Returns the scrollbar thumbs for the current state.
    #[must_use]
    pub fn scrollbars(&self, viewport: Rect) -> Scrollbars {
        Scrollbars::compute(
            viewport,
            self.canvas(viewport),
            self.area(viewport),
            self.padding,
        )
    }

    /// Returns the half-extent of the valid offset range at the current scale.
    #[must_use]
    pub fn pan_envelope(&self, viewport: Rect) -> Vec2 {
        pan_envelope(
            viewport.size(),
            self.content,
            self.transform.scale,
            self.padding,
        )
    }

    /// Converts a point in screen space into an anchor relative to the
    /// canvas center, suitable for [`ZoomPanView::scale_to`].
    #[must_use]
    pub fn anchor_for(&self, viewport: Rect, screen: Point) -> Vec2 {
        let canvas = self.canvas(viewport);
        screen - viewport.origin() - canvas.center().to_vec2()
    }

    /// Moves the offset to `offset`, clamped into the pan envelope.
    ///
    /// `NaN` components keep their current value. Returns the applied offset.
    pub fn pan_to(&mut self, viewport: Rect, offset: Vec2) -> Vec2 {
        let current = self.transform.offset;
        let requested = Vec2::new(
            if offset.x.is_nan() { current.x } else { offset.x },
            if offset.y.is_nan() { current.y } else { offset.y },
        );
        self.transform.offset = clamp_offset(requested, self.pan_envelope(viewport));
        self.transform.offset
    }

    /// Moves the offset by `delta`, clamped into the pan envelope.
    pub fn pan_by(&mut self, viewport: Rect, delta: Vec2) -> Vec2 {
        self.pan_to(viewport, self.transform.offset + delta)
    }

    /// Re-applies the current offset so it satisfies the envelope of
    /// `viewport`.
    pub fn reclamp(&mut self, viewport: Rect) {
        self.pan_to(viewport, self.transform.offset);
    }

    /// Returns the scale reached by zooming `delta` steps from the current
    /// scale, clamped into the limits.
    #[must_use]
    pub fn scale_by_delta(&self, delta: f64) -> f64 {
        scale_by_delta(self.transform.scale, delta, self.scale_factor, self.limits)
    }

    /// Sets the scale, optionally keeping an anchor point stationary.
    ///
    /// `anchor` is expressed relative to the canvas center at the current
    /// scale (see [`ZoomPanView::anchor_for`]). When given, the offset is
    /// shifted so that the content under the anchor stays under it. In every
    /// case the offset is re-clamped against the new pan envelope.
    ///
    /// Returns the applied scale.
    pub fn scale_to(&mut self, viewport: Rect, scale: f64, anchor: Option<Vec2>) -> f64 {
        let old = self.transform.scale;
        let new = self.limits.clamp(scale);
        self.transform.scale = new;
        let shift = anchor.map_or(Vec2::ZERO, |origin| anchor_shift(origin, old, new));
        self.pan_by(viewport, shift);
        new
    }

    /// Fits the padded content into `viewport` at a scale of at most `1.0`
    /// and recenters it.
    ///
    /// Returns the fitted scale, or `None` when the geometry is degenerate;
    /// the state is left untouched in that case.
    pub fn fit(&mut self, viewport: Rect) -> Option<f64> {
        let scale = fit_scale(
            viewport.size(),
            self.content,
            self.padding,
            self.fit_rounding,
        )?;
        self.transform.offset = Vec2::ZERO;
        Some(self.scale_to(viewport, scale, None))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, viewport: Rect) -> ZoomPanViewDebugInfo {
        ZoomPanViewDebugInfo {
            viewport,
            content: self.content,
            transform: self.transform,
            canvas: self.canvas(viewport),
            area: self.area(viewport),
            envelope: self.pan_envelope(viewport),
            scrollbars: self.scrollbars(viewport),
            limits: self.limits,
            padding: self.padding,
        }
    }
}

/// Debug snapshot of a [`ZoomPanView`] against one viewport.
#[derive(Clone, Copy, Debug)]
pub struct ZoomPanViewDebugInfo {
    /// Viewport the snapshot was taken against.
    pub viewport: Rect,
    /// Logical content size.
    pub content: Size,
    /// Current transform.
    pub transform: Transform,
    /// Scaled content rectangle relative to the viewport.
    pub canvas: Rect,
    /// Fictive scroll area.
    pub area: Size,
    /// Half-extent of the valid offset range.
    pub envelope: Vec2,
    /// Scrollbar thumbs.
    pub scrollbars: Scrollbars,
    /// Scale limits.
    pub limits: ScaleLimits,
    /// Minimum visible content, in pixels.
    pub padding: f64,
}
