// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete navigation commands and their default shortcuts.

use zoompan_hotkeys::Hotkeys;

/// A discrete navigation step that can be bound to a key or wheel combo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Pan up by one step.
    PanUp,
    /// Pan down by one step.
    PanDown,
    /// Pan left by one step.
    PanLeft,
    /// Pan right by one step.
    PanRight,
    /// Zoom in by one step. Anchored at the pointer when triggered by wheel.
    ScaleUp,
    /// Zoom out by one step. Anchored at the pointer when triggered by wheel.
    ScaleDown,
    /// Fit the content into the viewport.
    Fit,
}

/// Shortcuts installed when [`Config::keyboard`](crate::Config::keyboard)
/// is on.
pub const DEFAULT_BINDINGS: [(&str, Command); 8] = [
    ("ArrowUp", Command::PanUp),
    ("ArrowDown", Command::PanDown),
    ("ArrowLeft", Command::PanLeft),
    ("ArrowRight", Command::PanRight),
    ("+", Command::ScaleUp),
    ("=", Command::ScaleUp),
    ("-", Command::ScaleDown),
    ("0", Command::Fit),
];

pub(crate) fn default_hotkeys() -> Hotkeys<Command> {
    let mut keys = Hotkeys::new();
    for (combo, command) in DEFAULT_BINDINGS {
        keys.on(combo, command);
    }
    keys
}
