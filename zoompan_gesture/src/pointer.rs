// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Host-assigned identifier of one active pointer (a mouse, a finger, a pen).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Device class of a pointer.
///
/// Gestures never mix classes: a mouse and a finger held at the same time do
/// not form a pinch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A finger on a touch surface.
    Touch,
    /// A stylus.
    Pen,
}

/// Latest known state of one pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Position in screen space.
    pub position: Point,
    /// Movement since the previous sample of the same pointer.
    pub movement: Vec2,
}

impl PointerSample {
    /// A sample at `position` that has not moved yet.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            movement: Vec2::ZERO,
        }
    }
}
