// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived rectangles: the scaled canvas and the fictive scroll area.
//!
//! All functions here are pure. The viewport is passed in on every call
//! since the container can change size between calls without notice.

use kurbo::{Rect, Size};

use crate::Transform;

/// Returns the scaled content rectangle, relative to the viewport origin.
///
/// The content is centered in the viewport and then shifted by the
/// transform's offset.
#[must_use]
pub fn canvas_rect(viewport: Rect, content: Size, transform: Transform) -> Rect {
    let size = content * transform.scale;
    let x = (viewport.width() - size.width) / 2.0 + transform.offset.x;
    let y = (viewport.height() - size.height) / 2.0 + transform.offset.y;
    Rect::from_origin_size((x, y), size)
}

/// Returns the size of the fictive scroll area around `canvas`.
///
/// The area is the canvas plus almost a full viewport on each side (minus
/// `padding`); it only exists to size the scrollbar thumbs.
#[must_use]
pub fn area_size(viewport: Rect, canvas: Rect, padding: f64) -> Size {
    Size::new(
        2.0 * (viewport.width() - padding) + canvas.width(),
        2.0 * (viewport.height() - padding) + canvas.height(),
    )
}
