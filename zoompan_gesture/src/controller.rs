// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag/pinch gesture recognition from raw pointer events.
//!
//! ## Usage
//!
//! 1) Forward every pointer-down on the interactive surface to
//!    [`GestureController::pointer_down`].
//! 2) While [`GestureController::is_active`] is `true`, forward pointer moves
//!    and releases from *anywhere* (global capture) to
//!    [`GestureController::pointer_move`] and [`GestureController::pointer_up`]
//!    / [`GestureController::pointer_cancel`].
//! 3) Interpret the returned [`GestureEvent`]s as pan and zoom requests.
//!
//! ## State machine
//!
//! ```text
//!            down (1 live)              down (2 live)
//!   Idle ───────────────────▶ Dragging ───────────────▶ Pinching
//!    ▲                          │  ▲                        │
//!    │      up/cancel (0 live)  │  │   up/cancel (1 live)   │
//!    └──────────────────────────┘  └────────────────────────┘
//! ```
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoompan_gesture::{GestureController, GestureEvent, GestureState, PointerId, PointerKind};
//!
//! let mut gestures = GestureController::new();
//! let finger = PointerId(1);
//!
//! assert_eq!(
//!     gestures.pointer_down(finger, PointerKind::Touch, Point::new(10.0, 10.0)),
//!     Some(GestureEvent::Start)
//! );
//! assert_eq!(gestures.state(), GestureState::Dragging);
//!
//! assert_eq!(
//!     gestures.pointer_move(finger, Point::new(14.0, 7.0)),
//!     Some(GestureEvent::Pan(Vec2::new(4.0, -3.0)))
//! );
//!
//! assert_eq!(gestures.pointer_up(finger), Some(GestureEvent::End));
//! assert_eq!(gestures.state(), GestureState::Idle);
//! ```

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::pointer::{PointerId, PointerKind};
use crate::session::GestureSession;

/// Converts a change in finger distance (pixels) into zoom steps.
pub const PINCH_SENSITIVITY: f64 = 0.01;

/// Coarse gesture state derived from the live pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A single pointer is down and moves pan the content.
    ///
    /// Three or more pointers also report `Dragging`: the gesture is held
    /// but moves produce no motion until a pointer is released.
    Dragging,
    /// Exactly two pointers of the same class are down.
    Pinching,
}

/// What a pointer event means for the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The first pointer went down; a pan gesture starts.
    Start,
    /// Single-pointer drag by `delta` screen pixels.
    Pan(Vec2),
    /// Two-pointer pinch sample.
    Pinch {
        /// Average movement of both pointers for this sample.
        translation: Vec2,
        /// Zoom steps derived from the change in finger distance.
        scale_delta: f64,
        /// Screen point halfway between the two pointers; the zoom anchor.
        midpoint: Point,
    },
    /// The last pointer was released or cancelled.
    End,
}

/// Tracks live pointers and classifies their motion as drag or pinch.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    session: Option<GestureSession>,
    /// Finger distance at the previous pinch sample; `0.0` when no baseline
    /// has been taken yet.
    pinch_distance: f64,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match self.session.as_ref().map_or(0, GestureSession::len) {
            0 => GestureState::Idle,
            2 => GestureState::Pinching,
            _ => GestureState::Dragging,
        }
    }

    /// Returns `true` while any pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Handles a pointer-down on the interactive surface.
    ///
    /// Returns [`GestureEvent::Start`] when this is the first live pointer.
    /// Pointers of a different class than the running session are ignored.
    pub fn pointer_down(
        &mut self,
        id: PointerId,
        kind: PointerKind,
        position: Point,
    ) -> Option<GestureEvent> {
        let session = self.session.get_or_insert_with(|| GestureSession::new(kind));
        if session.kind() != kind {
            trace!(?id, ?kind, "ignoring pointer of a different class");
            return None;
        }
        if !session.press(id, position) {
            return None;
        }
        match session.len() {
            1 => {
                debug!(?id, ?kind, "drag started");
                Some(GestureEvent::Start)
            }
            2 => {
                self.pinch_distance = Self::pair_distance(session).unwrap_or(0.0);
                debug!(distance = self.pinch_distance, "pinch started");
                None
            }
            _ => None,
        }
    }

    /// Handles a pointer move.
    ///
    /// Each move carries the motion of one pointer; during a pinch the other
    /// pointer contributes no motion to that sample.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) -> Option<GestureEvent> {
        let session = self.session.as_mut()?;
        let sample = session.track(id, position)?;
        match session.len() {
            1 => Some(GestureEvent::Pan(sample.movement)),
            2 => {
                let (a, b) = session.pair()?;
                let distance = (b.position - a.position).hypot();
                let scale_delta = if self.pinch_distance > 0.0 {
                    (distance - self.pinch_distance) * PINCH_SENSITIVITY
                } else {
                    0.0
                };
                self.pinch_distance = distance;
                Some(GestureEvent::Pinch {
                    translation: sample.movement / 2.0,
                    scale_delta,
                    midpoint: a.position.lerp(b.position, 0.5),
                })
            }
            _ => None,
        }
    }

    /// Handles a pointer release.
    ///
    /// Returns [`GestureEvent::End`] when the last live pointer is released.
    pub fn pointer_up(&mut self, id: PointerId) -> Option<GestureEvent> {
        let session = self.session.as_mut()?;
        session.release(id)?;
        // A pair left over from three pointers needs its own baseline.
        self.pinch_distance = if session.len() == 2 {
            Self::pair_distance(session).unwrap_or(0.0)
        } else {
            0.0
        };
        if session.is_empty() {
            self.session = None;
            debug!(?id, "gesture ended");
            return Some(GestureEvent::End);
        }
        None
    }

    /// Handles a pointer cancellation.
    ///
    /// Cancellation is treated exactly like a release.
    pub fn pointer_cancel(&mut self, id: PointerId) -> Option<GestureEvent> {
        self.pointer_up(id)
    }

    /// Drops every live pointer.
    ///
    /// Returns [`GestureEvent::End`] if a gesture was in progress.
    pub fn reset(&mut self) -> Option<GestureEvent> {
        self.pinch_distance = 0.0;
        self.session.take().map(|_| GestureEvent::End)
    }

    fn pair_distance(session: &GestureSession) -> Option<f64> {
        let (a, b) = session.pair()?;
        Some((b.position - a.position).hypot())
    }
}
