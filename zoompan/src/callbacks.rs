// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification hooks fired by the engine.

use core::fmt;

use zoompan_view::Transform;

/// A notification the engine can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// The offset was (re)applied.
    Pan,
    /// A drag, pinch or track drag started.
    PanStart,
    /// A drag, pinch or track drag ended.
    PanEnd,
    /// The scale was (re)applied.
    Scale,
    /// Construction finished.
    Init,
    /// One transform mutation finished, after its `Pan`/`Scale` events.
    Change,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Pan,
        Self::PanStart,
        Self::PanEnd,
        Self::Scale,
        Self::Init,
        Self::Change,
    ];
}

type Hook = Box<dyn FnMut(&Transform)>;

/// Optional hooks invoked with the transform current at emission time.
///
/// Unset hooks are no-ops.
///
/// ```
/// use zoompan::Callbacks;
///
/// let callbacks = Callbacks::new()
///     .on_scale(|t| println!("scale is now {}", t.scale))
///     .on_pan_end(|_| println!("gesture done"));
/// # let _ = callbacks;
/// ```
#[derive(Default)]
pub struct Callbacks {
    pan: Option<Hook>,
    pan_start: Option<Hook>,
    pan_end: Option<Hook>,
    scale: Option<Hook>,
    init: Option<Hook>,
    change: Option<Hook>,
}

impl Callbacks {
    /// Creates a set with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `hook` for `event`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, event: Event, hook: impl FnMut(&Transform) + 'static) -> Self {
        *self.slot(event) = Some(Box::new(hook));
        self
    }

    /// Fires whenever the offset is applied.
    #[must_use]
    pub fn on_pan(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::Pan, hook)
    }

    /// Fires when a gesture starts.
    #[must_use]
    pub fn on_pan_start(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::PanStart, hook)
    }

    /// Fires when a gesture ends.
    #[must_use]
    pub fn on_pan_end(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::PanEnd, hook)
    }

    /// Fires whenever the scale is applied.
    #[must_use]
    pub fn on_scale(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::Scale, hook)
    }

    /// Fires once construction is complete.
    #[must_use]
    pub fn on_init(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::Init, hook)
    }

    /// Fires once per transform mutation.
    #[must_use]
    pub fn on_change(self, hook: impl FnMut(&Transform) + 'static) -> Self {
        self.on(Event::Change, hook)
    }

    /// Returns `true` if a hook is installed for `event`.
    #[must_use]
    pub fn is_set(&self, event: Event) -> bool {
        match event {
            Event::Pan => self.pan.is_some(),
            Event::PanStart => self.pan_start.is_some(),
            Event::PanEnd => self.pan_end.is_some(),
            Event::Scale => self.scale.is_some(),
            Event::Init => self.init.is_some(),
            Event::Change => self.change.is_some(),
        }
    }

    pub(crate) fn emit(&mut self, event: Event, transform: &Transform) {
        if let Some(hook) = self.slot(event) {
            hook(transform);
        }
    }

    fn slot(&mut self, event: Event) -> &mut Option<Hook> {
        match event {
            Event::Pan => &mut self.pan,
            Event::PanStart => &mut self.pan_start,
            Event::PanEnd => &mut self.pan_end,
            Event::Scale => &mut self.scale,
            Event::Init => &mut self.init,
            Event::Change => &mut self.change,
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("pan", &self.pan.is_some())
            .field("pan_start", &self.pan_start.is_some())
            .field("pan_end", &self.pan_end.is_some())
            .field("scale", &self.scale.is_some())
            .field("init", &self.init.is_some())
            .field("change", &self.change.is_some())
            .finish()
    }
}
