//! Model configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "conventions": "consistent",
//!   "initial": {
//!     "surfaceTempK": 6000.0,
//!     "solarLuminosity": 1.0,
//!     "solarRadius": 1.0,
//!     "anchor": "radius"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorAxis;
use crate::conventions::Conventions;
use crate::error::{ModelError, ModelResult};
use crate::limits::{self, Limits};

/// Starting values of the three independent quantities.
///
/// Derived forms (colour index, spectral type, 10²⁶ W, magnitude, 10⁵ km)
/// are computed from these when the model is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialState {
    pub surface_temp_k: f64,
    pub solar_luminosity: f64,
    pub solar_radius: f64,
    pub anchor: AnchorAxis,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            surface_temp_k: 6000.0,
            solar_luminosity: 1.0,
            solar_radius: 1.0,
            anchor: AnchorAxis::Radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    pub conventions: Conventions,
    pub initial: InitialState,
}

impl ModelConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let config: ModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every initial value lies inside its edit range.
    pub fn validate(&self) -> ModelResult<()> {
        check("surfaceTempK", self.initial.surface_temp_k, limits::SURFACE_TEMP_K)?;
        check("solarLuminosity", self.initial.solar_luminosity, limits::SOLAR_LUMINOSITY)?;
        check("solarRadius", self.initial.solar_radius, limits::SOLAR_RADIUS)?;
        Ok(())
    }
}

fn check(name: &str, value: f64, range: Limits) -> ModelResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(ModelError::InvalidConfig(format!(
            "initial.{} = {} is outside [{}, {}]",
            name, value, range.min, range.max
        )))
    }
}
