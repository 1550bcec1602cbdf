// Copyright 2025 the ZoomPan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::host::Element;

/// A [`Config`](crate::Config) value the engine cannot work with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric option is `NaN` or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A size or margin is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The lower scale bound is zero or negative.
    #[error("`scale_min` must be positive, got {0}")]
    NonPositiveScaleMin(f64),
    /// The lower scale bound exceeds the upper one.
    #[error("`scale_min` ({min}) exceeds `scale_max` ({max})")]
    InvertedScaleLimits {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The zoom step exponent is zero or negative.
    #[error("`scale_factor` must be positive, got {0}")]
    NonPositiveScaleFactor(f64),
}

/// Errors raised while building a [`ZoomPan`](crate::ZoomPan).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The host cannot provide an element the engine needs.
    #[error("host has no {0} element")]
    MissingElement(Element),
}
