//! Renderer inputs derived from the star's state.
//!
//! The host draws two spheres: an emissive core and a slightly larger halo
//! that carries the bloom. Everything here is a pure function of
//! [`StarState`] and the view toggles.

use serde::{Deserialize, Serialize};
use stellar::{StellarColor, TransferCurve};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::state::StarState;

/// Halo tint: 1.5 × (1 + Rec. 601 luma coefficient) per channel.
const HALO_WEIGHTS: [f64; 3] = [1.5 * 1.299, 1.5 * 1.587, 1.5 * 1.114];
/// Stars at or above this temperature get a halo larger than the core.
const HALO_GROWTH_THRESHOLD_K: f64 = 6000.0;
/// Reference orbit radius in scene units.
const ORBIT_RADIUS: f64 = 20.0;
/// Reference orbit radius with real scale enabled.
const ORBIT_RADIUS_REAL_SCALE: f64 = 200.0;

/// View toggles owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct ViewSettings {
    pub show_orbit: bool,
    pub real_scale: bool,
}

/// Earth's orbit drawn for scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct ReferenceOrbit {
    pub visible: bool,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub core_color: StellarColor,
    pub halo_color: StellarColor,
    /// Core sphere scale in solar radii
    pub core_scale: f64,
    pub halo_scale: f64,
    /// `1 + 2 log10(L)` floored at zero: stars below about 0.316 L☉ get no
    /// bloom at all.
    pub bloom_strength: f64,
    pub sun_like: bool,
    pub orbit: ReferenceOrbit,
}

impl Appearance {
    pub fn from_state(state: &StarState, curve: TransferCurve, view: &ViewSettings) -> Self {
        let core_color = StellarColor::from_temperature_with(state.surface_temp_k(), curve);
        let halo_ratio = if state.surface_temp_k() >= HALO_GROWTH_THRESHOLD_K {
            1.1
        } else {
            0.9
        };
        let sun_like = state.is_sun_like();

        Self {
            core_color,
            halo_color: core_color.weighted(HALO_WEIGHTS),
            core_scale: state.solar_radius(),
            halo_scale: state.solar_radius() * halo_ratio,
            bloom_strength: bloom_strength(state.solar_luminosity()),
            sun_like,
            orbit: ReferenceOrbit {
                visible: view.show_orbit || sun_like,
                radius: if view.real_scale {
                    ORBIT_RADIUS_REAL_SCALE
                } else {
                    ORBIT_RADIUS
                },
            },
        }
    }
}

/// `1 + 2 log10(L)`, floored at zero for the dimmest stars.
pub fn bloom_strength(solar_luminosity: f64) -> f64 {
    (1.0 + 2.0 * solar_luminosity.log10()).max(0.0)
}
