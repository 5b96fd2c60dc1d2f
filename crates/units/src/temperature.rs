use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Effective surface temperature of the Sun in Kelvin.
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// A stellar surface temperature using f64 precision.
///
/// Kelvin is the base unit. Stellar relations in this workspace are written
/// against the solar effective temperature, so the type also exposes the
/// ratio `T / T☉` that appears in the Stefan–Boltzmann scaling laws.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::solar();
/// let sirius = Temperature::from_kelvin(9940.0);
///
/// assert_eq!(sun.to_kelvin(), 5778.0);
/// assert!(sirius.ratio_to_solar() > 1.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// The Sun's effective temperature (5778 K).
    pub fn solar() -> Self {
        Self(SOLAR_TEMPERATURE_K)
    }

    /// Returns the temperature value in Kelvin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let temp = Temperature::from_kelvin(3500.0);
    /// assert_eq!(temp.to_kelvin(), 3500.0);
    /// ```
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Temperature expressed as a multiple of the solar effective temperature.
    pub fn ratio_to_solar(&self) -> f64 {
        self.0 / SOLAR_TEMPERATURE_K
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}
