use serde::{Deserialize, Serialize};

/// Nominal solar radius in meters.
pub const SOLAR_RADIUS_M: f64 = 6.9634e8;
/// Solar radius in units of 10⁵ km.
pub const SOLAR_RADIUS_1E5_KM: f64 = 6.9634;

/// A stellar radius using f64 precision.
///
/// The base unit is the solar radius (R☉). The interactive controls present
/// radii in 10⁵ km, so conversions to and from that unit take an explicit
/// factor: the canonical one is [`SOLAR_RADIUS_1E5_KM`], while callers that
/// need a different convention pass their own.
///
/// # Examples
///
/// ```rust
/// use units::Radius;
///
/// let sun = Radius::from_solar_radii(1.0);
/// assert_eq!(sun.to_meters(), 6.9634e8);
///
/// let giant = Radius::from_1e5_km_with(69.634, units::SOLAR_RADIUS_1E5_KM);
/// assert!((giant.to_solar_radii() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Radius(f64); // Base unit: R☉

impl Radius {
    /// Creates a new `Radius` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Radius` from a value in 10⁵ km, where one solar radius
    /// is `factor` × 10⁵ km.
    pub fn from_1e5_km_with(value: f64, factor: f64) -> Self {
        Self(value / factor)
    }

    /// The Sun's radius.
    pub fn solar() -> Self {
        Self(1.0)
    }

    /// Returns the radius in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }

    /// Returns the radius in meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * SOLAR_RADIUS_M
    }

    /// Returns the radius in 10⁵ km, where one solar radius is `factor` × 10⁵ km.
    pub fn to_1e5_km_with(&self, factor: f64) -> f64 {
        self.0 * factor
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}
