use serde::Serialize;

use stellar::{color_index_from_temperature, temperature_from_color_index, SpectralType};
use units::{Luminosity, Radius, Temperature};

use crate::anchor::AnchorAxis;
use crate::config::InitialState;
use crate::conventions::Conventions;

/// The star's linked physical quantities.
///
/// Read-only outside the crate: every mutation goes through
/// [`StarModel`](crate::StarModel) so derived fields never go stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarState {
    surface_temp_k: f64,
    color_index_bv: f64,
    /// `None` below the coolest spectral band
    spectral_type: Option<SpectralType>,
    solar_luminosity: f64,
    luminosity_1e26_w: f64,
    absolute_magnitude: f64,
    solar_radius: f64,
    radius_1e5_km: f64,
    anchor: AnchorAxis,
}

impl StarState {
    pub(crate) fn from_initial(initial: &InitialState, conventions: Conventions) -> Self {
        let mut state = Self {
            surface_temp_k: 0.0,
            color_index_bv: 0.0,
            spectral_type: None,
            solar_luminosity: 0.0,
            luminosity_1e26_w: 0.0,
            absolute_magnitude: 0.0,
            solar_radius: 0.0,
            radius_1e5_km: 0.0,
            anchor: initial.anchor,
        };
        state.write_temperature(Temperature::from_kelvin(initial.surface_temp_k));
        state.write_luminosity(Luminosity::from_solar(initial.solar_luminosity));
        state.write_radius(
            Radius::from_solar_radii(initial.solar_radius),
            conventions.radius_edit_factor(),
        );
        state
    }

    pub fn surface_temp_k(&self) -> f64 {
        self.surface_temp_k
    }

    pub fn color_index_bv(&self) -> f64 {
        self.color_index_bv
    }

    pub fn spectral_type(&self) -> Option<SpectralType> {
        self.spectral_type
    }

    pub fn solar_luminosity(&self) -> f64 {
        self.solar_luminosity
    }

    pub fn luminosity_1e26_w(&self) -> f64 {
        self.luminosity_1e26_w
    }

    pub fn absolute_magnitude(&self) -> f64 {
        self.absolute_magnitude
    }

    pub fn solar_radius(&self) -> f64 {
        self.solar_radius
    }

    pub fn radius_1e5_km(&self) -> f64 {
        self.radius_1e5_km
    }

    pub fn anchor(&self) -> AnchorAxis {
        self.anchor
    }

    pub fn temp_fixed(&self) -> bool {
        self.anchor == AnchorAxis::Temperature
    }

    pub fn lum_fixed(&self) -> bool {
        self.anchor == AnchorAxis::Luminosity
    }

    pub fn rad_fixed(&self) -> bool {
        self.anchor == AnchorAxis::Radius
    }

    pub fn temperature(&self) -> Temperature {
        Temperature::from_kelvin(self.surface_temp_k)
    }

    pub fn luminosity(&self) -> Luminosity {
        Luminosity::from_solar(self.solar_luminosity)
    }

    pub fn radius(&self) -> Radius {
        Radius::from_solar_radii(self.solar_radius)
    }

    /// True for a Sun twin: T, L and R all round to the solar values.
    pub fn is_sun_like(&self) -> bool {
        self.surface_temp_k.round() == 5778.0
            && self.solar_luminosity.round() == 1.0
            && self.solar_radius.round() == 1.0
    }

    pub(crate) fn set_anchor(&mut self, anchor: AnchorAxis) {
        self.anchor = anchor;
    }

    /// Temperature plus its colour index and spectral type.
    pub(crate) fn write_temperature(&mut self, temperature: Temperature) {
        self.surface_temp_k = temperature.to_kelvin();
        self.color_index_bv = color_index_from_temperature(temperature);
        self.spectral_type = SpectralType::from_temperature(self.surface_temp_k);
    }

    /// Colour index plus the temperature and spectral type it implies.
    pub(crate) fn write_color_index(&mut self, bv: f64) {
        self.color_index_bv = bv;
        self.surface_temp_k = temperature_from_color_index(bv).to_kelvin();
        self.spectral_type = SpectralType::from_temperature(self.surface_temp_k);
    }

    /// All three luminosity forms.
    pub(crate) fn write_luminosity(&mut self, luminosity: Luminosity) {
        self.solar_luminosity = luminosity.to_solar();
        self.luminosity_1e26_w = luminosity.to_1e26_watts();
        self.absolute_magnitude = luminosity.to_absolute_magnitude();
    }

    /// Both radius forms, with `km_factor` × 10⁵ km per solar radius.
    pub(crate) fn write_radius(&mut self, radius: Radius, km_factor: f64) {
        self.solar_radius = radius.to_solar_radii();
        self.radius_1e5_km = radius.to_1e5_km_with(km_factor);
    }

    /// Radius given in 10⁵ km; keeps the caller's value verbatim.
    pub(crate) fn write_radius_km(&mut self, radius_1e5_km: f64, km_factor: f64) {
        self.solar_radius = Radius::from_1e5_km_with(radius_1e5_km, km_factor).to_solar_radii();
        self.radius_1e5_km = radius_1e5_km;
    }
}
