//! Edit ranges of the interactive controls.
//!
//! Every edit input is clamped to its range before any formula runs.
//! Values recomputed by the resolver are not clamped.

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the interval. NaN passes through unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Both bounds multiplied by `factor`.
    pub const fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }
}

pub const SURFACE_TEMP_K: Limits = Limits::new(2400.0, 50_000.0);
pub const COLOR_INDEX_BV: Limits =
    Limits::new(stellar::photometry::MIN_COLOR_INDEX, stellar::photometry::MAX_COLOR_INDEX);
pub const SOLAR_LUMINOSITY: Limits = Limits::new(0.3, 5600.0);
pub const LUMINOSITY_1E26_W: Limits = Limits::new(3.8, 21_500.0);
pub const ABSOLUTE_MAGNITUDE: Limits = Limits::new(-4.5, 8.6);
pub const SOLAR_RADIUS: Limits = Limits::new(0.5, 15.0);
/// Slider range of the legacy controls. 3.3 × 10⁵ km sits below
/// `SOLAR_RADIUS.min` with either radius factor; consistent conventions use
/// [`SOLAR_RADIUS`] scaled by the factor instead.
pub const RADIUS_1E5_KM: Limits = Limits::new(3.3, 100.0);
