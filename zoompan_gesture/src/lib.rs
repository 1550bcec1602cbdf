// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomPan Gesture: pointer sessions and gesture state for pan/zoom input.
//!
//! This crate turns raw pointer events into pan and pinch requests. It
//! provides:
//!
//! - [`GestureSession`]: the live pointers of one device class and their
//!   latest samples.
//! - [`GestureController`]: the `Idle → Dragging → Pinching` state machine
//!   producing [`GestureEvent`]s.
//! - [`TrackDrag`]: the single-axis drag used by scrollbar tracks.
//!
//! Like the other ZoomPan crates, nothing here knows about a particular UI
//! toolkit. Hosts forward pointer ids, classes and screen positions; the
//! controller answers with deltas, zoom steps and anchors that the `zoompan`
//! engine applies to its transform.
//!
//! ## Pinch model
//!
//! While exactly two same-class pointers are live, every move produces a
//! [`GestureEvent::Pinch`] sample:
//!
//! - `translation`: the average movement of the two pointers;
//! - `scale_delta`: the change in finger distance since the previous sample,
//!   times [`PINCH_SENSITIVITY`], in the same unit as wheel zoom steps;
//! - `midpoint`: the point halfway between the fingers, used as the zoom
//!   anchor so it stays put on screen.
//!
//! When a pinch drops below two pointers the distance baseline is cleared,
//! so the next pinch starts from the distance at which it begins.

mod controller;
mod pointer;
mod session;
mod track;

pub use controller::{GestureController, GestureEvent, GestureState, PINCH_SENSITIVITY};
pub use pointer::{PointerId, PointerKind, PointerSample};
pub use session::GestureSession;
pub use track::TrackDrag;
