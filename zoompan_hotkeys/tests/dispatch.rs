// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `zoompan_hotkeys` crate.
//!
//! These exercise the activation contract the engine relies on: exact
//! order-independent matching, transient wheel tokens, suppression while
//! typing, and removal of single bindings.

use zoompan_hotkeys::{Combo, Hotkeys, WheelDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    PanUp,
    ZoomIn,
    ZoomOut,
    Fit,
}

fn registry() -> Hotkeys<Action> {
    Hotkeys::new()
        .with("ArrowUp", Action::PanUp)
        .with("ctrl wheelup", Action::ZoomIn)
        .with("Control WheelDown", Action::ZoomOut)
        .with("shift 0", Action::Fit)
}

#[test]
fn combo_matches_regardless_of_press_order() {
    let mut keys = registry();
    assert!(keys.key_down("0", false).is_empty());
    assert_eq!(keys.key_down("Shift", false), [Action::Fit]);

    keys.release_all();
    assert!(keys.key_down("Shift", false).is_empty());
    assert_eq!(keys.key_down("0", false), [Action::Fit]);
}

#[test]
fn matching_requires_the_exact_held_set() {
    let mut keys = registry();
    keys.key_down("Shift", false);
    assert!(
        keys.key_down("ArrowUp", false).is_empty(),
        "shift+arrowup must not trigger the plain arrowup binding"
    );
    keys.key_up("Shift");
    assert_eq!(keys.key_down("ArrowUp", false), [Action::PanUp]);
}

#[test]
fn wheel_token_is_transient() {
    let mut keys = registry();
    assert!(keys.wheel(WheelDirection::Up, false).is_empty());

    keys.key_down("Meta", false);
    assert_eq!(keys.wheel(WheelDirection::Up, false), [Action::ZoomIn]);
    assert_eq!(keys.wheel(WheelDirection::Down, false), [Action::ZoomOut]);
    assert!(!keys.is_active("wheelup"));
    assert!(!keys.is_active("wheeldown"));
    assert_eq!(keys.pressed(), Combo::parse("ctrl"));
}

#[test]
fn editable_targets_suppress_matching_but_keep_tracking() {
    let mut keys = registry();
    assert!(keys.key_down("Shift", true).is_empty());
    assert!(keys.key_down("0", true).is_empty());
    assert!(keys.is_active("shift"));
    assert!(keys.is_active("0"));

    keys.key_down("Control", true);
    assert!(keys.wheel(WheelDirection::Up, true).is_empty());
}

#[test]
fn off_removes_one_binding() {
    let mut keys = registry().with("ArrowUp", Action::ZoomIn);
    assert_eq!(keys.key_down("ArrowUp", false), [Action::PanUp, Action::ZoomIn]);
    keys.key_up("ArrowUp");

    assert!(keys.off("arrowup", &Action::PanUp));
    assert!(!keys.off("arrowup", &Action::PanUp));
    assert_eq!(keys.key_down("ArrowUp", false), [Action::ZoomIn]);
    keys.key_up("ArrowUp");

    assert!(keys.off("ARROWUP", &Action::ZoomIn));
    assert!(!keys.is_bound("arrowup"));
    assert!(keys.key_down("ArrowUp", false).is_empty());
}

#[test]
fn off_on_unknown_combo_is_a_no_op() {
    let mut keys = registry();
    let before = keys.len();
    assert!(!keys.off("ctrl z", &Action::Fit));
    assert_eq!(keys.len(), before);
}
