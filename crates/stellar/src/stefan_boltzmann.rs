//! Stefan–Boltzmann relation between luminosity, radius and temperature.
//!
//! In solar units the law reads `L = R² (T / T☉)⁴`; each function below solves
//! it for one quantity given the other two. The SI form and the linear
//! temperature approximation are kept alongside for callers that need to
//! reproduce older results.

use std::f64::consts::PI;

use units::{Luminosity, Radius, Temperature};

/// Stefan–Boltzmann constant σ in W m⁻² K⁻⁴ (rounded).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Luminosity of a blackbody sphere, `L = R² (T / T☉)⁴`.
pub fn luminosity(radius: Radius, temperature: Temperature) -> Luminosity {
    Luminosity::from_solar(radius.powi(2) * temperature.ratio_to_solar().powi(4))
}

/// Luminosity from the SI form, `L = 4π R² σ T⁴`, with `R` in meters.
///
/// With the rounded σ this sits about 0.6% above [`luminosity`] for the Sun.
pub fn luminosity_si(radius: Radius, temperature: Temperature) -> Luminosity {
    let r = radius.to_meters();
    Luminosity::from_watts(4.0 * PI * r * r * STEFAN_BOLTZMANN * temperature.powi(4))
}

/// Radius that emits `luminosity` at `temperature`, `R = √L / (T / T☉)²`.
pub fn radius(luminosity: Luminosity, temperature: Temperature) -> Radius {
    Radius::from_solar_radii(luminosity.to_solar().sqrt() / temperature.ratio_to_solar().powi(2))
}

/// Temperature at which `radius` emits `luminosity`, `T = T☉ (L / R²)^¼`.
pub fn temperature(luminosity: Luminosity, radius: Radius) -> Temperature {
    Temperature::solar() * (luminosity.to_solar() / radius.powi(2)).powf(0.25)
}

/// Linear approximation `T = T☉ L / R²`.
///
/// Agrees with [`temperature`] only when `L = R²`; elsewhere it overshoots
/// the fourth-root law badly.
pub fn temperature_linear(luminosity: Luminosity, radius: Radius) -> Temperature {
    Temperature::solar() * (luminosity.to_solar() / radius.powi(2))
}

/// Relative mismatch `|L - R² (T/T☉)⁴| / L` of a parameter set.
pub fn relative_residual(luminosity: Luminosity, radius: Radius, temperature: Temperature) -> f64 {
    let expected = self::luminosity(radius, temperature).to_solar();
    ((luminosity.to_solar() - expected) / luminosity.to_solar()).abs()
}
