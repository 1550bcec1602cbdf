// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input descriptions handed to the engine by the host.

use kurbo::{Point, Vec2};

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift is held.
    pub shift: bool,
    /// Ctrl is held.
    pub ctrl: bool,
    /// Alt / Option is held.
    pub alt: bool,
    /// Meta / Command is held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    /// Only ctrl held.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    /// Only meta held.
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Ctrl and meta are treated alike: either one turns the wheel into zoom.
    #[must_use]
    pub fn zoom(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A wheel or trackpad scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position in screen coordinates.
    pub position: Point,
    /// Scroll amount in pixels; positive `y` scrolls down.
    pub delta: Vec2,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
    /// Whether the event targets an editable element, such as a text field.
    pub editable: bool,
}

impl WheelInput {
    /// A wheel event at `position` scrolling vertically by `delta_y`.
    #[must_use]
    pub fn new(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta: Vec2::new(0.0, delta_y),
            modifiers: Modifiers::NONE,
            editable: false,
        }
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Marks the event as targeting an editable element.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Zoom/pan direction of this event: `1.0` for scrolling up, `-1.0` for
    /// scrolling down and `0.0` when there is no vertical motion.
    #[must_use]
    pub fn step(&self) -> f64 {
        let dy = -self.delta.y;
        if dy > 0.0 {
            1.0
        } else if dy < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}
