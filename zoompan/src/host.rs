// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and the UI that displays it.

use core::fmt;
use core::time::Duration;

use kurbo::{Rect, Size, Vec2};
use zoompan_view::{Axis, Scrollbars};

/// Elements the engine expects the host to provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The bounded container the content is seen through.
    Viewport,
    /// The content surface that receives the transform.
    Canvas,
    /// Horizontal scrollbar track.
    TrackX,
    /// Horizontal scrollbar thumb.
    ThumbX,
    /// Vertical scrollbar track.
    TrackY,
    /// Vertical scrollbar thumb.
    ThumbY,
}

impl Element {
    /// Elements needed by every engine.
    pub const CORE: [Self; 2] = [Self::Viewport, Self::Canvas];
    /// Elements needed when scrollbars are enabled.
    pub const SCROLLBARS: [Self; 4] = [Self::TrackX, Self::ThumbX, Self::TrackY, Self::ThumbY];

    /// The scrollbar track along `axis`.
    #[must_use]
    pub fn track(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::TrackX,
            Axis::Vertical => Self::TrackY,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Viewport => "viewport",
            Self::Canvas => "canvas",
            Self::TrackX => "horizontal track",
            Self::ThumbX => "horizontal thumb",
            Self::TrackY => "vertical track",
            Self::ThumbY => "vertical thumb",
        })
    }
}

/// Everything the host needs to present the current state.
///
/// This is the engine's only visible output. The host sizes the canvas to
/// `content`, scales it by `scale` around its center and translates it by
/// `translate`, then positions the scrollbar thumbs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Logical content size.
    pub content: Size,
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation from the centered position, in viewport pixels.
    pub translate: Vec2,
    /// Scrollbar thumbs, when scrollbars are enabled.
    pub scrollbars: Option<Scrollbars>,
    /// How long the host should ease into this frame.
    ///
    /// `None` while a pointer gesture or track drag is in progress so the
    /// content follows the pointer directly.
    pub transition: Option<Duration>,
}

/// Host environment driving a [`ZoomPan`](crate::ZoomPan).
///
/// The engine never caches host geometry: [`Host::viewport`] and
/// [`Host::track_extent`] are queried whenever a value is needed, because
/// the container may change size without notice.
pub trait Host {
    /// Current viewport rectangle in screen coordinates.
    fn viewport(&self) -> Rect;

    /// Whether the host can provide `element`.
    fn has_element(&self, element: Element) -> bool;

    /// Length of the scrollbar track along `axis`, in screen pixels.
    fn track_extent(&self, axis: Axis) -> f64;

    /// Presents a new frame.
    fn apply(&mut self, frame: &Frame);

    /// Starts routing pointer moves and releases from anywhere to the engine.
    ///
    /// Called when a gesture or track drag starts.
    fn capture_pointers(&mut self) {}

    /// Stops the routing started by [`Host::capture_pointers`].
    ///
    /// Called exactly once for every capture, on release, cancellation or
    /// [`ZoomPan::detach`](crate::ZoomPan::detach).
    fn release_pointers(&mut self) {}
}
