// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomPan Hotkeys: keyboard and wheel combo dispatch.
//!
//! This crate keeps the set of held keys and maps exact key combinations to
//! host-defined actions:
//!
//! - [`Combo`]: a canonical, order-independent key combination such as
//!   `"ctrl wheelup"`.
//! - [`Hotkeys`]: the registry that tracks held keys and returns the actions
//!   bound to the current combo.
//! - [`WheelDirection`]: the synthetic `wheelup` / `wheeldown` keys, which
//!   are held only for the duration of one wheel event.
//!
//! Key names are whatever the host reports (`"ArrowUp"`, `"Shift"`, `"+"`).
//! They are lowercased, and `control` and `meta` both become `ctrl`.
//! Matching is suppressed while focus is in an editable element so typing
//! never triggers navigation.

mod combo;
mod registry;

pub use combo::{Combo, WheelDirection, normalize_key};
pub use registry::Hotkeys;
