// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::Point;

use crate::pointer::{PointerId, PointerKind, PointerSample};

/// The set of pointers of one device class that are currently down.
///
/// A session is created on the first pointer-down and lives until its last
/// pointer is released or cancelled.
#[derive(Clone, Debug)]
pub struct GestureSession {
    kind: PointerKind,
    pointers: HashMap<PointerId, PointerSample>,
}

impl GestureSession {
    /// Starts a session for pointers of `kind`.
    #[must_use]
    pub fn new(kind: PointerKind) -> Self {
        Self {
            kind,
            pointers: HashMap::new(),
        }
    }

    /// Device class accepted by this session.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Number of live pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` when no pointer is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Returns `true` if `id` is live in this session.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    /// Returns the latest sample of `id`.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<PointerSample> {
        self.pointers.get(&id).copied()
    }

    /// Live pointer ids, in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<PointerId> {
        let mut ids: Vec<_> = self.pointers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Registers `id` at `position`.
    ///
    /// Returns `false` if the pointer was already live; its position is
    /// refreshed in that case.
    pub fn press(&mut self, id: PointerId, position: Point) -> bool {
        self.pointers
            .insert(id, PointerSample::at(position))
            .is_none()
    }

    /// Records a new position for `id` and returns the updated sample.
    ///
    /// Movement is measured from the previous sample. Unknown ids yield
    /// `None`.
    pub fn track(&mut self, id: PointerId, position: Point) -> Option<PointerSample> {
        let sample = self.pointers.get_mut(&id)?;
        *sample = PointerSample {
            position,
            movement: position - sample.position,
        };
        Some(*sample)
    }

    /// Removes `id`, returning its last sample.
    pub fn release(&mut self, id: PointerId) -> Option<PointerSample> {
        self.pointers.remove(&id)
    }

    /// Returns the two live samples ordered by pointer id, if exactly two
    /// pointers are live.
    #[must_use]
    pub fn pair(&self) -> Option<(PointerSample, PointerSample)> {
        if self.pointers.len() != 2 {
            return None;
        }
        let ids = self.ids();
        Some((self.pointers[&ids[0]], self.pointers[&ids[1]]))
    }
}
