// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and its validation.

use core::time::Duration;

use zoompan_view::{FitRounding, ScaleLimits};

use crate::error::ConfigError;

/// Construction options for [`ZoomPan`](crate::ZoomPan).
///
/// Every field has a default; start from [`Config::default`] and override
/// what you need with the `with_*` setters. The configuration is checked
/// once by [`Config::validate`] when the engine is built.
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Logical content width.
    pub width: f64,
    /// Logical content height.
    pub height: f64,
    /// Initial horizontal offset from the centered position.
    pub offset_x: f64,
    /// Initial vertical offset from the centered position.
    pub offset_y: f64,
    /// Initial scale, used when `fit_on_init` is off.
    pub scale: f64,
    /// Largest allowed scale.
    pub scale_max: f64,
    /// Smallest allowed scale.
    pub scale_min: f64,
    /// Exponent applied per zoom step: one step multiplies the scale by
    /// `e^scale_factor`.
    pub scale_factor: f64,
    /// Minimum number of content pixels kept visible on each axis.
    pub padding: f64,
    /// Distance of one keyboard or wheel pan step, in pixels.
    pub pan_step: f64,
    /// Fit the content into the viewport on construction.
    pub fit_on_init: bool,
    /// Whether single-pointer drags pan the content.
    pub can_drag: bool,
    /// Whether two-pointer pinches pan and zoom the content.
    pub can_pinch: bool,
    /// Easing duration hinted to the host for discrete changes.
    pub transition: Duration,
    /// Whether the host shows scrollbars. Frames carry thumb metrics only
    /// when this is on.
    pub scrollbars: bool,
    /// How [`ZoomPan::fit`](crate::ZoomPan::fit) rounds the fitted scale.
    pub fit_rounding: FitRounding,
    /// Install the default keyboard bindings.
    pub keyboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            scale_max: 10.0,
            scale_min: 0.05,
            scale_factor: 0.2,
            padding: 40.0,
            pan_step: 50.0,
            fit_on_init: true,
            can_drag: true,
            can_pinch: true,
            transition: Duration::from_millis(250),
            scrollbars: true,
            fit_rounding: FitRounding::default(),
            keyboard: true,
        }
    }
}

impl Config {
    /// Sets the logical content size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the initial offset.
    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Sets the initial scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    /// Sets the zoom step exponent.
    #[must_use]
    pub fn with_scale_factor(mut self, factor: f64) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Sets the minimum visible content margin.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the keyboard and wheel pan step.
    #[must_use]
    pub fn with_pan_step(mut self, step: f64) -> Self {
        self.pan_step = step;
        self
    }

    /// Enables or disables fitting on construction.
    #[must_use]
    pub fn with_fit_on_init(mut self, fit: bool) -> Self {
        self.fit_on_init = fit;
        self
    }

    /// Enables or disables drag panning.
    #[must_use]
    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.can_drag = enabled;
        self
    }

    /// Enables or disables pinch zooming.
    #[must_use]
    pub fn with_pinch(mut self, enabled: bool) -> Self {
        self.can_pinch = enabled;
        self
    }

    /// Sets the transition hint for discrete changes.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Enables or disables scrollbars.
    #[must_use]
    pub fn with_scrollbars(mut self, enabled: bool) -> Self {
        self.scrollbars = enabled;
        self
    }

    /// Sets the fit rounding mode.
    #[must_use]
    pub fn with_fit_rounding(mut self, rounding: FitRounding) -> Self {
        self.fit_rounding = rounding;
        self
    }

    /// Enables or disables the default keyboard bindings.
    #[must_use]
    pub fn with_keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    /// Scale limits described by this configuration.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.scale_min, self.scale_max)
    }

    /// Checks that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("width", self.width),
            ("height", self.height),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("scale", self.scale),
            ("scale_max", self.scale_max),
            ("scale_min", self.scale_min),
            ("scale_factor", self.scale_factor),
            ("padding", self.padding),
            ("pan_step", self.pan_step),
        ];
        if let Some(&(field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.scale_min <= 0.0 {
            return Err(ConfigError::NonPositiveScaleMin(self.scale_min));
        }
        if self.scale_min > self.scale_max {
            return Err(ConfigError::InvertedScaleLimits {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        if self.scale_factor <= 0.0 {
            return Err(ConfigError::NonPositiveScaleFactor(self.scale_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::ConfigError;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.scale_limits().min(), 0.05);
        assert_eq!(config.scale_limits().max(), 10.0);
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let config = Config::default().with_scale_limits(4.0, 2.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedScaleLimits { min: 4.0, max: 2.0 })
        );
    }

    #[test]
    fn first_non_finite_field_is_reported() {
        let config = Config::default().with_scale(f64::INFINITY).with_padding(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "scale", .. })
        ));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert_eq!(
            Config::default().with_scale_limits(0.0, 1.0).validate(),
            Err(ConfigError::NonPositiveScaleMin(0.0))
        );
        assert_eq!(
            Config::default().with_scale_factor(-0.1).validate(),
            Err(ConfigError::NonPositiveScaleFactor(-0.1))
        );
        assert_eq!(
            Config::default().with_size(-1.0, 10.0).validate(),
            Err(ConfigError::Negative {
                field: "width",
                value: -1.0
            })
        );
    }
}
