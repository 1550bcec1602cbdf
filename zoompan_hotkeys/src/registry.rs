// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressed-key tracking and combo dispatch.
//!
//! ## Usage
//!
//! 1) Register actions with [`Hotkeys::on`] (or [`Hotkeys::with`] while
//!    building).
//! 2) Forward key presses and releases to [`Hotkeys::key_down`] and
//!    [`Hotkeys::key_up`], and wheel notches to [`Hotkeys::wheel`].
//! 3) Run the actions they return.
//!
//! A combo fires only when the set of held keys equals it exactly: with
//! `shift` and `arrowup` held, a binding on `"arrowup"` does not fire but one
//! on `"shift arrowup"` does.
//!
//! ```
//! use zoompan_hotkeys::{Hotkeys, WheelDirection};
//!
//! let mut keys = Hotkeys::new()
//!     .with("ArrowUp", "pan-up")
//!     .with("ctrl WheelUp", "zoom-in");
//!
//! assert_eq!(keys.key_down("ArrowUp", false), ["pan-up"]);
//! keys.key_up("ArrowUp");
//!
//! keys.key_down("Control", false);
//! assert_eq!(keys.wheel(WheelDirection::Up, false), ["zoom-in"]);
//! // The wheel token is only held while its event is evaluated.
//! assert!(!keys.is_active("wheelup"));
//! ```

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::combo::{Combo, WheelDirection, normalize_key};

/// Registry of key combos and the actions bound to them.
///
/// `A` is the host's action type; actions are cloned out on every match.
#[derive(Clone, Debug)]
pub struct Hotkeys<A> {
    /// Canonical names of the keys currently held, in press order.
    pressed: SmallVec<[String; 4]>,
    bindings: HashMap<Combo, SmallVec<[A; 1]>>,
}

impl<A> Default for Hotkeys<A> {
    fn default() -> Self {
        Self {
            pressed: SmallVec::new(),
            bindings: HashMap::new(),
        }
    }
}

impl<A> Hotkeys<A> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action` to `combo`. Returns the canonical combo.
    ///
    /// Several actions may share a combo; they run in registration order.
    pub fn on(&mut self, combo: &str, action: A) -> Combo {
        let combo = Combo::parse(combo);
        self.bindings
            .entry(combo.clone())
            .or_default()
            .push(action);
        combo
    }

    /// Builder form of [`Hotkeys::on`].
    #[must_use]
    pub fn with(mut self, combo: &str, action: A) -> Self {
        self.on(combo, action);
        self
    }

    /// Removes every binding of `combo`. Returns how many were removed.
    pub fn clear_combo(&mut self, combo: &str) -> usize {
        self.bindings
            .remove(&Combo::parse(combo))
            .map_or(0, |actions| actions.len())
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Number of bound actions across all combos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.values().map(SmallVec::len).sum()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns `true` if some action is bound to `combo`.
    #[must_use]
    pub fn is_bound(&self, combo: &str) -> bool {
        self.bindings.contains_key(&Combo::parse(combo))
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: &str) {
        let key = normalize_key(key);
        self.pressed.retain(|k| *k != key);
    }

    /// Forgets every held key, e.g. when the host window loses focus and
    /// releases will not be delivered.
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Returns `true` while `key` is held.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.pressed.iter().any(|k| *k == key)
    }

    /// The combo formed by the keys currently held.
    #[must_use]
    pub fn pressed(&self) -> Combo {
        Combo::from_keys(self.pressed.iter().map(String::as_str))
    }
}

impl<A: Clone> Hotkeys<A> {
    /// Records a key press and returns the actions bound to the resulting
    /// held set.
    ///
    /// When `editable` is `true` (focus is in a text input) the key is still
    /// tracked but nothing fires.
    pub fn key_down(&mut self, key: &str, editable: bool) -> Vec<A> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Vec::new();
        }
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
        if editable {
            return Vec::new();
        }
        self.matching(None)
    }

    /// Evaluates one wheel notch together with the held keys.
    ///
    /// The wheel token takes part only in this evaluation and is never left
    /// pressed.
    pub fn wheel(&self, direction: WheelDirection, editable: bool) -> Vec<A> {
        if editable {
            return Vec::new();
        }
        self.matching(Some(direction.token()))
    }

    fn matching(&self, extra: Option<&str>) -> Vec<A> {
        let held = self.pressed.iter().map(String::as_str).chain(extra);
        let combo = Combo::from_keys(held);
        self.bindings
            .get(&combo)
            .map(|actions| actions.to_vec())
            .unwrap_or_default()
    }
}

impl<A: PartialEq> Hotkeys<A> {
    /// Removes the first binding of `action` to `combo`. Returns `true` if
    /// one was removed.
    pub fn off(&mut self, combo: &str, action: &A) -> bool {
        let combo = Combo::parse(combo);
        let Some(actions) = self.bindings.get_mut(&combo) else {
            return false;
        };
        let Some(index) = actions.iter().position(|a| a == action) else {
            return false;
        };
        actions.remove(index);
        if actions.is_empty() {
            self.bindings.remove(&combo);
        }
        true
    }
}
