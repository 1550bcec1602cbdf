// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomPan: an interactive pan/zoom viewport engine.
//!
//! [`ZoomPan`] shows a fixed-size content surface through a bounded viewport
//! and lets the user navigate it by dragging, pinching, scrolling and with
//! keyboard shortcuts. It keeps the transform inside its invariants:
//!
//! - the scale stays within `[scale_min, scale_max]`;
//! - at least `padding` pixels of content stay visible on each axis;
//! - anchored zooms keep the point under the pointer (or between the
//!   fingers) in place.
//!
//! The engine is headless. A [`Host`] supplies the viewport rectangle and
//! the scrollbar track lengths, receives a [`Frame`] after every change, and
//! captures pointers while a gesture is in progress. Hosts forward raw input
//! through [`ZoomPan::pointer_down`], [`ZoomPan::wheel`],
//! [`ZoomPan::key_down`] and friends.
//!
//! The building blocks live in their own crates and are re-exported here:
//! the transform model (`zoompan_view`), gesture recognition
//! (`zoompan_gesture`) and combo matching (`zoompan_hotkeys`).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use zoompan::{Axis, Callbacks, Config, Element, Frame, Host, PointerId, PointerKind, WheelInput, ZoomPan};
//!
//! #[derive(Debug, Default)]
//! struct Headless {
//!     last: Option<Frame>,
//! }
//!
//! impl Host for Headless {
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 1000.0, 800.0)
//!     }
//!     fn has_element(&self, _: Element) -> bool {
//!         true
//!     }
//!     fn track_extent(&self, axis: Axis) -> f64 {
//!         match axis {
//!             Axis::Horizontal => 1000.0,
//!             Axis::Vertical => 800.0,
//!         }
//!     }
//!     fn apply(&mut self, frame: &Frame) {
//!         self.last = Some(*frame);
//!     }
//! }
//!
//! let mut zp = ZoomPan::new(Headless::default(), Config::default(), Callbacks::new())?;
//! assert_eq!(zp.scale(), 1.0);
//!
//! // Drag the content 30px to the right.
//! let mouse = PointerId(1);
//! zp.pointer_down(mouse, PointerKind::Mouse, Point::new(500.0, 400.0));
//! zp.pointer_move(mouse, Point::new(530.0, 400.0));
//! zp.pointer_up(mouse);
//! assert_eq!(zp.offset().x, 30.0);
//!
//! // Ctrl + wheel zooms around the pointer.
//! let mut zoom = WheelInput::new(Point::new(530.0, 400.0), -100.0);
//! zoom.modifiers.ctrl = true;
//! assert!(zp.wheel(zoom));
//! assert!(zp.scale() > 1.0);
//!
//! let frame = zp.host().last.expect("a frame was applied");
//! assert_eq!(frame.scale, zp.scale());
//! # Ok::<(), zoompan::Error>(())
//! ```
//!
//! ## Callback order
//!
//! Each public mutation fires its notifications synchronously, after the
//! new [`Frame`] has been applied:
//!
//! | Operation                  | Events                          |
//! |----------------------------|---------------------------------|
//! | `pan_*`, drag, track drag  | `Pan`, `Change`                 |
//! | `scale_to` without origin  | `Scale`, `Change`               |
//! | `scale_to` with origin     | `Pan`, `Scale`, `Change`        |
//! | pinch sample               | `Pan`, (`Pan`, `Scale`), `Change` |
//! | `fit`                      | `Scale`, `Pan`, `Change`        |
//! | `resize`                   | `Change`                        |
//!
//! `PanStart` and `PanEnd` bracket every drag, pinch and track drag.

mod callbacks;
mod command;
mod config;
mod engine;
mod error;
mod host;
mod input;
pub mod wheel;

pub use callbacks::{Callbacks, Event};
pub use command::{Command, DEFAULT_BINDINGS};
pub use config::Config;
pub use engine::ZoomPan;
pub use error::{ConfigError, Error};
pub use host::{Element, Frame, Host};
pub use input::{Modifiers, WheelInput};

pub use zoompan_gesture::{GestureState, PointerId, PointerKind};
pub use zoompan_hotkeys::Combo;
pub use zoompan_view::{Axis, FitRounding, ScrollbarThumb, Scrollbars, Transform};
