// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace, warn};
use zoompan_gesture::{
    GestureController, GestureEvent, GestureState, PointerId, PointerKind, TrackDrag,
};
use zoompan_hotkeys::{Combo, Hotkeys, WheelDirection};
use zoompan_view::{Axis, Scrollbars, Transform, ZoomPanView};

use crate::callbacks::{Callbacks, Event};
use crate::command::{Command, default_hotkeys};
use crate::config::Config;
use crate::error::Error;
use crate::host::{Element, Frame, Host};
use crate::input::WheelInput;
use crate::wheel::{WheelAction, wheel_action};

/// A pan/zoom viewport driven by pointer, wheel and keyboard input.
///
/// `ZoomPan` owns the transform and the gesture session and talks to the UI
/// through a [`Host`]. Every mutation runs to completion before the call
/// returns: the transform is clamped, a fresh [`Frame`] is handed to
/// [`Host::apply`], and the matching [`Callbacks`] fire, with
/// [`Event::Change`] last.
#[derive(Debug)]
pub struct ZoomPan<H: Host> {
    host: H,
    config: Config,
    view: ZoomPanView,
    gestures: GestureController,
    track: TrackDrag,
    hotkeys: Hotkeys<Command>,
    callbacks: Callbacks,
    /// Whether [`Host::capture_pointers`] is in effect.
    captured: bool,
}

impl<H: Host> ZoomPan<H> {
    /// Builds an engine over `host`.
    ///
    /// The configuration is validated and the host is checked for the
    /// elements the engine needs. The content is then sized and either
    /// fitted or placed at the configured scale and offset, after which
    /// [`Event::Init`] fires.
    pub fn new(host: H, config: Config, callbacks: Callbacks) -> Result<Self, Error> {
        config.validate()?;
        let scrollbar_elements: &[Element] = if config.scrollbars {
            &Element::SCROLLBARS
        } else {
            &[]
        };
        for &element in Element::CORE.iter().chain(scrollbar_elements) {
            if !host.has_element(element) {
                return Err(Error::MissingElement(element));
            }
        }

        let mut view = ZoomPanView::new(Size::new(config.width, config.height));
        view.set_scale_limits(config.scale_limits());
        view.set_scale_factor(config.scale_factor);
        view.set_padding(config.padding);
        view.set_fit_rounding(config.fit_rounding);
        let hotkeys = if config.keyboard {
            default_hotkeys()
        } else {
            Hotkeys::new()
        };

        let mut engine = Self {
            host,
            config,
            view,
            gestures: GestureController::new(),
            track: TrackDrag::default(),
            hotkeys,
            callbacks,
            captured: false,
        };
        engine.resize(None, None);
        if engine.config.fit_on_init {
            engine.fit();
        } else {
            engine.scale_to(engine.config.scale, None);
            engine.pan_to(engine.config.offset_x, engine.config.offset_y);
        }
        debug!(
            scale = engine.view.scale(),
            offset_x = engine.view.offset().x,
            offset_y = engine.view.offset().y,
            "zoompan initialized"
        );
        engine.emit(Event::Init);
        Ok(engine)
    }

    // --- Geometry ---

    /// Current viewport rectangle, queried from the host.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.host.viewport()
    }

    /// Scaled content rectangle, relative to the viewport origin.
    #[must_use]
    pub fn canvas(&self) -> Rect {
        self.view.canvas(self.viewport())
    }

    /// Fictive scroll area used to size the scrollbars.
    #[must_use]
    pub fn area(&self) -> Size {
        self.view.area(self.viewport())
    }

    /// Scrollbar thumbs for the current state.
    #[must_use]
    pub fn scrollbars(&self) -> Scrollbars {
        self.view.scrollbars(self.viewport())
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.view.transform()
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    /// Current offset from the centered position.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.view.offset()
    }

    /// The frame the host should currently display.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let viewport = self.viewport();
        let transform = self.view.transform();
        Frame {
            content: self.view.content(),
            scale: transform.scale,
            translate: transform.offset,
            scrollbars: self
                .config
                .scrollbars
                .then(|| self.view.scrollbars(viewport)),
            transition: (!self.is_interacting()).then_some(self.config.transition),
        }
    }

    /// State of the pointer gesture on the viewport.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    /// Returns `true` while a pointer gesture or a track drag is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.gestures.is_active() || self.track.is_dragging()
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying transform model.
    #[must_use]
    pub fn view(&self) -> &ZoomPanView {
        &self.view
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Enables or disables drag panning at runtime.
    ///
    /// Useful to require a modifier for dragging: start disabled and enable
    /// while the modifier is held.
    pub fn set_can_drag(&mut self, enabled: bool) {
        self.config.can_drag = enabled;
    }

    /// Enables or disables pinch zooming at runtime.
    pub fn set_can_pinch(&mut self, enabled: bool) {
        self.config.can_pinch = enabled;
    }

    // --- Lifecycle ---

    /// Sets the logical content size. `None` keeps the current extent.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) {
        let current = self.view.content();
        let content = Size::new(
            width.unwrap_or(current.width),
            height.unwrap_or(current.height),
        );
        let viewport = self.viewport();
        self.view.set_content(viewport, content);
        trace!(width = content.width, height = content.height, "resize");
        self.present();
        self.emit(Event::Change);
    }

    /// Re-clamps the offset after the host viewport changed size.
    pub fn window_resized(&mut self) {
        let offset = self.view.offset();
        self.pan_to(offset.x, offset.y);
    }

    /// Ends any gesture or track drag, forgets held keys and releases
    /// pointer capture. Call before tearing the host down.
    pub fn detach(&mut self) {
        let gesture = self.gestures.reset().is_some();
        let track = self.track.cancel();
        self.hotkeys.release_all();
        if gesture || track {
            debug!("gesture abandoned on detach");
            self.emit(Event::PanEnd);
        }
        self.sync_capture();
    }

    /// Detaches and returns the host.
    pub fn into_host(mut self) -> H {
        self.detach();
        self.host
    }

    // --- Scale ---

    /// Fits the padded content into the viewport at a scale of at most `1.0`
    /// and recenters it. Returns the fitted scale.
    ///
    /// On a degenerate viewport or content the state is kept and `None` is
    /// returned.
    pub fn fit(&mut self) -> Option<f64> {
        let viewport = self.viewport();
        let Some(scale) = self.view.fit(viewport) else {
            warn!(
                viewport_width = viewport.width(),
                viewport_height = viewport.height(),
                "cannot fit into a degenerate viewport or content"
            );
            return None;
        };
        debug!(scale, "fit");
        self.present();
        self.emit(Event::Scale);
        self.emit(Event::Pan);
        self.emit(Event::Change);
        Some(scale)
    }

    /// Sets the scale, keeping `origin` stationary when given.
    ///
    /// `origin` is relative to the canvas center at the current scale. The
    /// scale is clamped into the configured limits and the offset re-clamped.
    /// Returns the applied scale.
    pub fn scale_to(&mut self, scale: f64, origin: Option<Vec2>) -> f64 {
        self.apply_scale(scale, origin);
        self.emit(Event::Change);
        self.view.scale()
    }

    /// Zooms by `delta` steps around the canvas center.
    pub fn scale_delta(&mut self, delta: f64) -> f64 {
        let target = self.view.scale_by_delta(delta);
        self.scale_to(target, None)
    }

    /// Zooms by `delta` steps keeping the content under `screen` in place.
    pub fn scale_delta_at(&mut self, delta: f64, screen: Point) -> f64 {
        let anchor = self.view.anchor_for(self.viewport(), screen);
        let target = self.view.scale_by_delta(delta);
        self.scale_to(target, Some(anchor))
    }

    /// Zooms in one step.
    pub fn scale_up(&mut self) -> f64 {
        self.scale_delta(1.0)
    }

    /// Zooms out one step.
    pub fn scale_down(&mut self) -> f64 {
        self.scale_delta(-1.0)
    }

    // --- Pan ---

    /// Moves the offset to `(x, y)`, clamped into the pan envelope. Returns
    /// the applied offset.
    pub fn pan_to(&mut self, x: f64, y: f64) -> Vec2 {
        self.apply_pan(Vec2::new(x, y));
        self.emit(Event::Change);
        self.view.offset()
    }

    /// Moves the offset by `delta`.
    pub fn pan_by(&mut self, delta: Vec2) -> Vec2 {
        let target = self.view.offset() + delta;
        self.pan_to(target.x, target.y)
    }

    /// Pans up by one step.
    pub fn pan_up(&mut self) -> Vec2 {
        self.pan_by(Vec2::new(0.0, -self.config.pan_step))
    }

    /// Pans down by one step.
    pub fn pan_down(&mut self) -> Vec2 {
        self.pan_by(Vec2::new(0.0, self.config.pan_step))
    }

    /// Pans left by one step.
    pub fn pan_left(&mut self) -> Vec2 {
        self.pan_by(Vec2::new(-self.config.pan_step, 0.0))
    }

    /// Pans right by one step.
    pub fn pan_right(&mut self) -> Vec2 {
        self.pan_by(Vec2::new(self.config.pan_step, 0.0))
    }

    // --- Pointer input ---

    /// A pointer went down on the viewport.
    pub fn pointer_down(&mut self, id: PointerId, kind: PointerKind, position: Point) {
        if self.gestures.pointer_down(id, kind, position) == Some(GestureEvent::Start) {
            self.emit(Event::PanStart);
        }
        self.sync_capture();
    }

    /// A captured pointer moved to `position`.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) {
        match self.gestures.pointer_move(id, position) {
            Some(GestureEvent::Pan(delta)) if self.config.can_drag => {
                self.pan_by(delta);
            }
            Some(GestureEvent::Pinch {
                translation,
                scale_delta,
                midpoint,
            }) if self.config.can_pinch => {
                self.apply_pan(self.view.offset() + translation);
                if scale_delta != 0.0 {
                    let anchor = self.view.anchor_for(self.viewport(), midpoint);
                    let target = self.view.scale_by_delta(scale_delta);
                    self.apply_scale(target, Some(anchor));
                }
                self.emit(Event::Change);
            }
            _ => {}
        }
    }

    /// A captured pointer was released.
    pub fn pointer_up(&mut self, id: PointerId) {
        if self.gestures.pointer_up(id) == Some(GestureEvent::End) {
            self.emit(Event::PanEnd);
        }
        self.sync_capture();
    }

    /// A captured pointer was cancelled by the platform.
    pub fn pointer_cancel(&mut self, id: PointerId) {
        if self.gestures.pointer_cancel(id) == Some(GestureEvent::End) {
            self.emit(Event::PanEnd);
        }
        self.sync_capture();
    }

    /// A pointer went down on the scrollbar track along `axis`.
    ///
    /// Ignored when scrollbars are disabled.
    pub fn track_pointer_down(&mut self, axis: Axis, id: PointerId, position: Point) {
        if !self.config.scrollbars {
            return;
        }
        let replaced = self.track.is_dragging();
        self.track.start(axis, id, position);
        if !replaced {
            debug!(?axis, "track drag started");
            self.emit(Event::PanStart);
        }
        self.sync_capture();
    }

    /// A pointer dragging a scrollbar track moved to `position`.
    ///
    /// Dragging the thumb one way moves the content the other way, scaled so
    /// the full track spans the whole scroll area.
    pub fn track_pointer_move(&mut self, id: PointerId, position: Point) {
        let Some((axis, movement)) = self.track.update(id, position) else {
            return;
        };
        let extent = self.host.track_extent(axis);
        if !extent.is_finite() || extent <= 0.0 {
            return;
        }
        let ratio = axis.extent(self.area()) / extent;
        self.pan_by(axis.vector(-ratio * movement));
    }

    /// A pointer dragging a scrollbar track was released or cancelled.
    pub fn track_pointer_up(&mut self, id: PointerId) {
        if self.track.end(id) {
            debug!("track drag ended");
            self.emit(Event::PanEnd);
        }
        self.sync_capture();
    }

    // --- Wheel and keyboard ---

    /// Handles a wheel event. Returns `true` if the event was consumed and
    /// the host should suppress its default scrolling.
    ///
    /// The event is first matched against the bindings with a `wheelup` or
    /// `wheeldown` key; a matching binding replaces the default behavior
    /// described in [`wheel`](crate::wheel). Events targeting editable
    /// elements are ignored.
    pub fn wheel(&mut self, input: WheelInput) -> bool {
        if input.editable {
            return false;
        }
        if let Some(direction) = WheelDirection::from_delta_y(input.delta.y) {
            let commands = self.hotkeys.wheel(direction, false);
            if !commands.is_empty() {
                for command in commands {
                    self.run_at(command, Some(input.position));
                }
                return true;
            }
        }
        match wheel_action(&input, self.config.pan_step) {
            Some(WheelAction::Pan(delta)) => {
                self.pan_by(delta);
                true
            }
            Some(WheelAction::Zoom(steps)) => {
                self.scale_delta_at(steps, input.position);
                true
            }
            None => false,
        }
    }

    /// Records a key press and runs the commands bound to the held keys.
    /// Returns `true` if any command ran.
    ///
    /// `editable` reports whether focus is in a text field; keys are then
    /// tracked but never trigger commands.
    pub fn key_down(&mut self, key: &str, editable: bool) -> bool {
        let commands = self.hotkeys.key_down(key, editable);
        for &command in &commands {
            self.run(command);
        }
        !commands.is_empty()
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: &str) {
        self.hotkeys.key_up(key);
    }

    /// Forgets every held key, e.g. when the window loses focus.
    pub fn release_keys(&mut self) {
        self.hotkeys.release_all();
    }

    /// Binds `command` to a key or wheel combo such as `"shift wheelup"`.
    pub fn bind(&mut self, combo: &str, command: Command) -> Combo {
        self.hotkeys.on(combo, command)
    }

    /// Removes one binding of `command` to `combo`. Returns `true` if one
    /// was removed.
    pub fn unbind(&mut self, combo: &str, command: Command) -> bool {
        self.hotkeys.off(combo, &command)
    }

    /// The key and wheel bindings.
    #[must_use]
    pub fn hotkeys(&self) -> &Hotkeys<Command> {
        &self.hotkeys
    }

    /// Runs `command`.
    pub fn run(&mut self, command: Command) {
        self.run_at(command, None);
    }

    fn run_at(&mut self, command: Command, pointer: Option<Point>) {
        trace!(?command, "run");
        match (command, pointer) {
            (Command::PanUp, _) => {
                self.pan_up();
            }
            (Command::PanDown, _) => {
                self.pan_down();
            }
            (Command::PanLeft, _) => {
                self.pan_left();
            }
            (Command::PanRight, _) => {
                self.pan_right();
            }
            (Command::ScaleUp, Some(at)) => {
                self.scale_delta_at(1.0, at);
            }
            (Command::ScaleUp, None) => {
                self.scale_up();
            }
            (Command::ScaleDown, Some(at)) => {
                self.scale_delta_at(-1.0, at);
            }
            (Command::ScaleDown, None) => {
                self.scale_down();
            }
            (Command::Fit, _) => {
                self.fit();
            }
        }
    }

    // --- Internals ---

    /// Clamps and applies `offset`, presents and emits [`Event::Pan`].
    fn apply_pan(&mut self, offset: Vec2) {
        let viewport = self.viewport();
        self.view.pan_to(viewport, offset);
        self.present();
        self.emit(Event::Pan);
    }

    /// Clamps and applies `scale`, presents and emits [`Event::Scale`],
    /// preceded by [`Event::Pan`] for anchored zooms and whenever the
    /// offset had to be re-clamped.
    fn apply_scale(&mut self, scale: f64, anchor: Option<Vec2>) {
        let viewport = self.viewport();
        let offset = self.view.offset();
        self.view.scale_to(viewport, scale, anchor);
        self.present();
        if anchor.is_some() || self.view.offset() != offset {
            self.emit(Event::Pan);
        }
        self.emit(Event::Scale);
    }

    fn present(&mut self) {
        let frame = self.frame();
        self.host.apply(&frame);
    }

    fn emit(&mut self, event: Event) {
        let transform = self.view.transform();
        self.callbacks.emit(event, &transform);
    }

    /// Captures pointers while interacting and releases them otherwise.
    fn sync_capture(&mut self) {
        let wanted = self.is_interacting();
        if wanted == self.captured {
            return;
        }
        self.captured = wanted;
        if wanted {
            trace!("capturing pointers");
            self.host.capture_pointers();
        } else {
            trace!("releasing pointers");
            self.host.release_pointers();
        }
    }
}
