use serde::{Deserialize, Serialize};

/// Nominal solar luminosity in watts (IAU 2015 B3).
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;
/// Solar luminosity in units of 10²⁶ W.
pub const SOLAR_LUMINOSITY_1E26_W: f64 = 3.828;
/// Absolute bolometric magnitude of the Sun.
pub const SOLAR_ABSOLUTE_MAGNITUDE: f64 = 4.83;

/// A stellar luminosity using f64 precision.
///
/// The base unit is the solar luminosity (L☉). Three equivalent forms are
/// supported: solar units, 10²⁶ W (the form used by the interactive controls)
/// and absolute magnitude.
///
/// Absolute magnitude follows the Pogson relation anchored on the Sun:
///
/// ```text
/// M = M☉ - 2.5 log10(L / L☉)
/// ```
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar(1.0);
/// assert!((sun.to_absolute_magnitude() - 4.83).abs() < 1e-12);
///
/// let hundred = Luminosity::from_absolute_magnitude(-0.17);
/// assert!((hundred.to_solar() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    /// Creates a new `Luminosity` from a value in units of 10²⁶ W.
    pub fn from_1e26_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_1E26_W)
    }

    /// Creates a new `Luminosity` from an absolute bolometric magnitude.
    ///
    /// Inverse of [`Luminosity::to_absolute_magnitude`]:
    /// `L = 10^(-0.4 (M - M☉))`.
    pub fn from_absolute_magnitude(magnitude: f64) -> Self {
        Self(10f64.powf(-0.4 * (magnitude - SOLAR_ABSOLUTE_MAGNITUDE)))
    }

    /// The Sun's luminosity.
    pub fn solar() -> Self {
        Self(1.0)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Returns the luminosity in units of 10²⁶ W.
    pub fn to_1e26_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_1E26_W
    }

    /// Returns the absolute bolometric magnitude.
    ///
    /// Brighter stars have smaller (more negative) magnitudes. Zero or
    /// negative luminosities map to positive infinity and NaN respectively,
    /// exactly as `log10` does.
    pub fn to_absolute_magnitude(&self) -> f64 {
        SOLAR_ABSOLUTE_MAGNITUDE - 2.5 * self.0.log10()
    }
}
