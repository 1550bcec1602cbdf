// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the `zoompan` integration tests.

#![allow(
    dead_code,
    reason = "Integration-test helper module; not every test file uses every fixture."
)]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use zoompan::{Axis, Callbacks, Config, Element, Event, Frame, Host, ZoomPan};

/// Host with a resizable viewport that records what the engine does to it.
#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) viewport: Rect,
    pub(crate) track_x: f64,
    pub(crate) track_y: f64,
    pub(crate) missing: Vec<Element>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) captures: usize,
    pub(crate) releases: usize,
}

impl TestHost {
    /// A 1000×800 viewport at the screen origin with full-width tracks.
    pub(crate) fn new() -> Self {
        Self::with_viewport(Rect::new(0.0, 0.0, 1000.0, 800.0))
    }

    pub(crate) fn with_viewport(viewport: Rect) -> Self {
        Self {
            viewport,
            track_x: viewport.width(),
            track_y: viewport.height(),
            missing: Vec::new(),
            frames: Vec::new(),
            captures: 0,
            releases: 0,
        }
    }

    pub(crate) fn without(mut self, element: Element) -> Self {
        self.missing.push(element);
        self
    }

    pub(crate) fn last_frame(&self) -> Frame {
        *self.frames.last().expect("no frame applied yet")
    }

    pub(crate) fn is_captured(&self) -> bool {
        self.captures > self.releases
    }
}

impl Host for TestHost {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn has_element(&self, element: Element) -> bool {
        !self.missing.contains(&element)
    }

    fn track_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.track_x,
            Axis::Vertical => self.track_y,
        }
    }

    fn apply(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }

    fn capture_pointers(&mut self) {
        self.captures += 1;
    }

    fn release_pointers(&mut self) {
        self.releases += 1;
    }
}

/// Shared log of emitted events.
pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

/// Callbacks that append every event to the returned log.
pub(crate) fn recording() -> (Callbacks, EventLog) {
    let log = EventLog::default();
    let mut callbacks = Callbacks::new();
    for event in Event::ALL {
        let log = log.clone();
        callbacks = callbacks.on(event, move |_| log.borrow_mut().push(event));
    }
    (callbacks, log)
}

/// Takes and clears the recorded events.
pub(crate) fn drain(log: &EventLog) -> Vec<Event> {
    core::mem::take(&mut *log.borrow_mut())
}

/// Engine over a default [`TestHost`] with the given configuration.
pub(crate) fn engine(config: Config) -> ZoomPan<TestHost> {
    ZoomPan::new(TestHost::new(), config, Callbacks::new()).expect("valid test configuration")
}

/// Engine over a default [`TestHost`] with an event log attached.
pub(crate) fn recorded_engine(config: Config) -> (ZoomPan<TestHost>, EventLog) {
    let (callbacks, log) = recording();
    let zp = ZoomPan::new(TestHost::new(), config, callbacks).expect("valid test configuration");
    (zp, log)
}

pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
