// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default meaning of wheel events that no binding claims.
//!
//! | Modifiers   | Effect                                   |
//! |-------------|------------------------------------------|
//! | none        | vertical pan by `pan_step` per notch     |
//! | shift       | horizontal pan by `pan_step` per notch   |
//! | ctrl / meta | one zoom step anchored at the pointer    |
//!
//! Ctrl/meta wins over shift when both are held.

use kurbo::Vec2;

use crate::input::WheelInput;

/// What a wheel event asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Move the offset by this many pixels.
    Pan(Vec2),
    /// Zoom by this many steps around the pointer.
    Zoom(f64),
}

/// Maps `input` to its default action, or `None` when it carries no vertical
/// motion.
#[must_use]
pub fn wheel_action(input: &WheelInput, pan_step: f64) -> Option<WheelAction> {
    let step = input.step();
    if step == 0.0 {
        return None;
    }
    let modifiers = input.modifiers;
    Some(if modifiers.zoom() {
        WheelAction::Zoom(step)
    } else if modifiers.shift {
        WheelAction::Pan(Vec2::new(pan_step * step, 0.0))
    } else {
        WheelAction::Pan(Vec2::new(0.0, pan_step * step))
    })
}
