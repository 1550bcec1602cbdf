// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a `ZoomPan` engine through a scripted session and logs every
//! frame it produces.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to also see the engine's own
//! logging.

use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zoompan::{
    Axis, Callbacks, Config, Element, Frame, Host, Modifiers, PointerId, PointerKind, WheelInput,
    ZoomPan,
};

/// A window-less host: a fixed screen position and a resizable viewport.
#[derive(Debug)]
struct LoggingHost {
    viewport: Rect,
    frames: usize,
}

impl Host for LoggingHost {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn has_element(&self, _: Element) -> bool {
        true
    }

    fn track_extent(&self, axis: Axis) -> f64 {
        // Tracks span the viewport minus a 12px corner.
        match axis {
            Axis::Horizontal => self.viewport.width() - 12.0,
            Axis::Vertical => self.viewport.height() - 12.0,
        }
    }

    fn apply(&mut self, frame: &Frame) {
        self.frames += 1;
        let (thumb_x, thumb_y) = frame
            .scrollbars
            .map_or((0.0, 0.0), |s| (s.x.position_percent, s.y.position_percent));
        info!(
            n = self.frames,
            scale = format_args!("{:.3}", frame.scale),
            x = format_args!("{:.1}", frame.translate.x),
            y = format_args!("{:.1}", frame.translate.y),
            thumb_x = format_args!("{thumb_x:.1}%"),
            thumb_y = format_args!("{thumb_y:.1}%"),
            eased = frame.transition.is_some(),
            "frame"
        );
    }

    fn capture_pointers(&mut self) {
        info!("capture pointers");
    }

    fn release_pointers(&mut self) {
        info!("release pointers");
    }
}

fn main() -> Result<(), zoompan::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = LoggingHost {
        viewport: Rect::new(40.0, 60.0, 1240.0, 860.0),
        frames: 0,
    };
    let callbacks = Callbacks::new()
        .on_init(|t| info!(scale = t.scale, "ready"))
        .on_pan_start(|_| info!("gesture start"))
        .on_pan_end(|t| info!(x = t.offset.x, y = t.offset.y, "gesture end"));
    let config = Config::default().with_size(1600.0, 1200.0);
    let mut zp = ZoomPan::new(host, config, callbacks)?;

    info!("-- mouse drag");
    let mouse = PointerId(1);
    zp.pointer_down(mouse, PointerKind::Mouse, Point::new(600.0, 400.0));
    for step in 1..=4 {
        zp.pointer_move(mouse, Point::new(600.0 + 25.0 * f64::from(step), 400.0));
    }
    zp.pointer_up(mouse);

    info!("-- two-finger pinch");
    let (a, b) = (PointerId(10), PointerId(11));
    zp.pointer_down(a, PointerKind::Touch, Point::new(500.0, 450.0));
    zp.pointer_down(b, PointerKind::Touch, Point::new(700.0, 450.0));
    for step in 1..=3 {
        zp.pointer_move(b, Point::new(700.0 + 40.0 * f64::from(step), 450.0));
    }
    zp.pointer_cancel(b);
    zp.pointer_up(a);

    info!("-- ctrl + wheel zoom at the pointer");
    let zoom = WheelInput::new(Point::new(900.0, 300.0), -120.0).with_modifiers(Modifiers::CTRL);
    zp.wheel(zoom);

    info!("-- keyboard");
    zp.key_down("ArrowLeft", false);
    zp.key_up("ArrowLeft");
    zp.key_down("-", false);
    zp.key_up("-");

    info!("-- scrollbar track drag");
    zp.track_pointer_down(Axis::Vertical, mouse, Point::new(1230.0, 300.0));
    zp.track_pointer_move(mouse, Point::new(1230.0, 340.0));
    zp.track_pointer_up(mouse);

    info!("-- window shrinks");
    zp.host_mut().viewport = Rect::new(40.0, 60.0, 640.0, 460.0);
    zp.window_resized();

    info!("-- fit");
    zp.key_down("0", false);
    zp.key_up("0");

    let host = zp.into_host();
    info!(frames = host.frames, "done");
    Ok(())
}
