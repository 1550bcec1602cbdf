// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomPan View: the headless transform model behind a pan/zoom viewport.
//!
//! This crate models a fixed-size content surface shown through a bounded
//! viewport. It focuses on:
//! - Transform state (uniform scale + offset from the centered position).
//! - The clamped pan envelope that keeps some content always visible.
//! - Exponential, anchor-preserving zoom.
//! - Fitting the content into the viewport.
//! - Scrollbar thumb metrics derived from a fictive scroll area.
//!
//! It does **not** own input handling, rendering, or the viewport itself.
//! Callers are expected to:
//! - Query their layout for the current viewport rectangle and pass it to
//!   every operation that needs it.
//! - Apply the resulting [`Transform`] and [`Scrollbars`] to their content
//!   surface and scrollbar thumbs.
//! - Route pointer, wheel and keyboard input into pan/zoom calls at a higher
//!   layer (see the `zoompan` crate).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use zoompan_view::ZoomPanView;
//!
//! let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
//! let mut view = ZoomPanView::new(Size::new(800.0, 600.0));
//!
//! // Fit the padded content into the viewport.
//! assert_eq!(view.fit(viewport), Some(1.0));
//!
//! // Zoom in one step around the pointer.
//! let anchor = view.anchor_for(viewport, Point::new(700.0, 300.0));
//! let target = view.scale_by_delta(1.0);
//! view.scale_to(viewport, target, Some(anchor));
//!
//! // Panning is clamped so that content can never leave the viewport.
//! view.pan_to(viewport, Vec2::new(1e6, 0.0));
//! assert!(view.offset().x <= view.pan_envelope(viewport).x);
//!
//! let bars = view.scrollbars(viewport);
//! assert!(bars.x.size_percent > 0.0 && bars.x.size_percent <= 100.0);
//! ```
//!
//! ## Coordinate conventions
//!
//! - The offset is the translation of the content center relative to the
//!   viewport center, in viewport pixels.
//! - Zoom anchors are expressed relative to the canvas center at the scale
//!   in effect *before* the zoom.
//! - Canvas rectangles are relative to the viewport origin.

mod geometry;
mod modes;
mod scrollbar;
mod transform;
mod view;
mod zoom;

pub use geometry::{area_size, canvas_rect};
pub use modes::{Axis, FitRounding};
pub use scrollbar::{ScrollbarThumb, Scrollbars};
pub use transform::{ScaleLimits, Transform, clamp_offset, pan_envelope};
pub use view::{ZoomPanView, ZoomPanViewDebugInfo};
pub use zoom::{anchor_shift, fit_scale, scale_by_delta};
