use serde::{Deserialize, Serialize};

use stellar::stefan_boltzmann;
use stellar::TransferCurve;
use units::{Luminosity, Radius, Temperature, SOLAR_RADIUS_1E5_KM};

use crate::limits::{self, Limits};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Radius factor used by the legacy controls for R☉ ↔ 10⁵ km edits.
pub const LEGACY_RADIUS_1E5_KM: f64 = 6.6934;

/// Numeric conventions for the model's formulas.
///
/// `Consistent` keeps every relation exactly invertible: one radius factor,
/// the solar-unit Stefan–Boltzmann law and its fourth-root inverse, and the
/// standard sRGB curve.
///
/// `Legacy` reproduces the behaviour of the first interactive version of the
/// tool: 6.6934 for radius edits (but 6.9634 when the radius is recomputed),
/// the SI luminosity form, the linear temperature inverse and a squaring
/// colour curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub enum Conventions {
    #[default]
    Consistent,
    Legacy,
}

impl Conventions {
    /// 10⁵ km per solar radius for direct radius edits.
    pub fn radius_edit_factor(&self) -> f64 {
        match self {
            Conventions::Consistent => SOLAR_RADIUS_1E5_KM,
            Conventions::Legacy => LEGACY_RADIUS_1E5_KM,
        }
    }

    /// Edit range for radius entered in 10⁵ km.
    pub fn radius_1e5_km_limits(&self) -> Limits {
        match self {
            Conventions::Consistent => limits::SOLAR_RADIUS.scaled(self.radius_edit_factor()),
            Conventions::Legacy => limits::RADIUS_1E5_KM,
        }
    }

    /// 10⁵ km per solar radius when the resolver recomputes the radius.
    pub fn radius_recompute_factor(&self) -> f64 {
        SOLAR_RADIUS_1E5_KM
    }

    pub fn luminosity(&self, radius: Radius, temperature: Temperature) -> Luminosity {
        match self {
            Conventions::Consistent => stefan_boltzmann::luminosity(radius, temperature),
            Conventions::Legacy => stefan_boltzmann::luminosity_si(radius, temperature),
        }
    }

    pub fn radius(&self, luminosity: Luminosity, temperature: Temperature) -> Radius {
        stefan_boltzmann::radius(luminosity, temperature)
    }

    pub fn temperature(&self, luminosity: Luminosity, radius: Radius) -> Temperature {
        match self {
            Conventions::Consistent => stefan_boltzmann::temperature(luminosity, radius),
            Conventions::Legacy => stefan_boltzmann::temperature_linear(luminosity, radius),
        }
    }

    pub fn transfer_curve(&self) -> TransferCurve {
        match self {
            Conventions::Consistent => TransferCurve::Srgb,
            Conventions::Legacy => TransferCurve::Squared,
        }
    }
}
