// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollbar-track drag: a single-pointer drag constrained to one axis.
//!
//! ## Usage
//!
//! 1) On pointer-down over a scrollbar track, call [`TrackDrag::start`] with
//!    the track's axis.
//! 2) On each move, [`TrackDrag::update`] returns the pointer movement along
//!    that axis.
//! 3) End with [`TrackDrag::end`] on release or cancellation.
//!
//! ```
//! use kurbo::Point;
//! use zoompan_gesture::{PointerId, TrackDrag};
//! use zoompan_view::Axis;
//!
//! let mut drag = TrackDrag::default();
//! drag.start(Axis::Horizontal, PointerId(1), Point::new(10.0, 5.0));
//!
//! // Only the horizontal component counts.
//! assert_eq!(drag.update(PointerId(1), Point::new(16.0, 40.0)), Some((Axis::Horizontal, 6.0)));
//! assert!(drag.end(PointerId(1)));
//! ```

use kurbo::Point;
use zoompan_view::Axis;

use crate::pointer::PointerId;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    axis: Axis,
    pointer: PointerId,
    last: Point,
}

/// Tracks one scrollbar-track drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackDrag {
    grab: Option<Grab>,
}

impl TrackDrag {
    /// Starts dragging the track of `axis` with `pointer`.
    ///
    /// A drag already in progress is replaced.
    pub fn start(&mut self, axis: Axis, pointer: PointerId, position: Point) {
        self.grab = Some(Grab {
            axis,
            pointer,
            last: position,
        });
    }

    /// Records a new position and returns the movement along the dragged
    /// axis since the previous one.
    ///
    /// Moves of other pointers are ignored.
    pub fn update(&mut self, pointer: PointerId, position: Point) -> Option<(Axis, f64)> {
        let grab = self.grab.as_mut().filter(|g| g.pointer == pointer)?;
        let movement = grab.axis.of(position - grab.last);
        grab.last = position;
        Some((grab.axis, movement))
    }

    /// Ends the drag if `pointer` owns it. Returns `true` if a drag ended.
    pub fn end(&mut self, pointer: PointerId) -> bool {
        if self.grab.is_some_and(|g| g.pointer == pointer) {
            self.grab = None;
            return true;
        }
        false
    }

    /// Ends any drag in progress. Returns `true` if a drag ended.
    pub fn cancel(&mut self) -> bool {
        self.grab.take().is_some()
    }

    /// Axis being dragged, if any.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.grab.map(|g| g.axis)
    }

    /// Returns `true` while a track drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use zoompan_view::Axis;

    use super::TrackDrag;
    use crate::PointerId;

    #[test]
    fn fresh_drag_is_idle() {
        let drag = TrackDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.axis(), None);
    }

    #[test]
    fn vertical_track_reports_y_movement() {
        let mut drag = TrackDrag::default();
        drag.start(Axis::Vertical, PointerId(4), Point::new(0.0, 100.0));
        assert_eq!(
            drag.update(PointerId(4), Point::new(30.0, 90.0)),
            Some((Axis::Vertical, -10.0))
        );
        assert_eq!(
            drag.update(PointerId(4), Point::new(30.0, 95.5)),
            Some((Axis::Vertical, 5.5))
        );
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut drag = TrackDrag::default();
        drag.start(Axis::Horizontal, PointerId(1), Point::ZERO);
        assert_eq!(drag.update(PointerId(2), Point::new(50.0, 0.0)), None);
        assert!(!drag.end(PointerId(2)));
        assert!(drag.is_dragging());
        assert_eq!(
            drag.update(PointerId(1), Point::new(3.0, 0.0)),
            Some((Axis::Horizontal, 3.0))
        );
    }

    #[test]
    fn end_and_cancel_reset() {
        let mut drag = TrackDrag::default();
        assert!(!drag.cancel());
        drag.start(Axis::Horizontal, PointerId(1), Point::ZERO);
        assert!(drag.end(PointerId(1)));
        assert!(!drag.end(PointerId(1)));
        drag.start(Axis::Vertical, PointerId(1), Point::ZERO);
        assert!(drag.cancel());
        assert_eq!(drag.update(PointerId(1), Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn restart_replaces_previous_drag() {
        let mut drag = TrackDrag::default();
        drag.start(Axis::Horizontal, PointerId(1), Point::ZERO);
        drag.start(Axis::Vertical, PointerId(1), Point::new(50.0, 60.0));
        assert_eq!(drag.axis(), Some(Axis::Vertical));
        assert_eq!(
            drag.update(PointerId(1), Point::new(55.0, 65.0)),
            Some((Axis::Vertical, 5.0))
        );
    }
}
