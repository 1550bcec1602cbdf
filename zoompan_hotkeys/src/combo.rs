// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use smallvec::SmallVec;

/// Canonical name of a set of keys held at the same time.
///
/// Combos are written as whitespace-separated key names, in any order and
/// any case: `"Shift ArrowUp"`, `"arrowup  shift"` and `"SHIFT arrowup"` all
/// name the same combo. `control` and `meta` are aliased to `ctrl`, and the
/// synthetic `wheelup` / `wheeldown` tokens name wheel notches.
///
/// The canonical form is the lowercase key names sorted and joined by single
/// spaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combo(String);

impl Combo {
    /// Parses a combo written as whitespace-separated key names.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_keys(text.split_whitespace())
    }

    /// Builds the combo formed by `keys`, each a single key name as reported
    /// by the host (`"Control"`, `"a"`, `" "`).
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: SmallVec<[String; 4]> = keys
            .into_iter()
            .map(normalize_key)
            .filter(|k| !k.is_empty())
            .collect();
        names.sort_unstable();
        names.dedup();
        Self(names.join(" "))
    }

    /// Canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the combo of no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key names in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|k| !k.is_empty())
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes one host key name into its canonical token.
///
/// Lowercases, aliases `control`/`meta` to `ctrl`, and names the space bar
/// `space` so it survives whitespace splitting.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    if key == " " {
        return "space".into();
    }
    let lower = key.trim().to_lowercase();
    match lower.as_str() {
        "control" | "meta" => "ctrl".into(),
        _ => lower,
    }
}

/// Direction of one wheel notch, as a synthetic combo token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Wheel rolled away from the user (negative `deltaY`).
    Up,
    /// Wheel rolled toward the user (positive `deltaY`).
    Down,
}

impl WheelDirection {
    /// Classifies a vertical wheel delta. Zero and `NaN` carry no direction.
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::Up)
        } else if delta_y > 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }

    /// The combo token for this direction.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Up => "wheelup",
            Self::Down => "wheeldown",
        }
    }
}
