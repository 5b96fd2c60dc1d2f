use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Coolest temperature that still falls inside a spectral band.
pub const MIN_CLASSIFIED_TEMPERATURE_K: f64 = 2400.0;

/// Harvard spectral classes for main sequence stars, hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// Classify a surface temperature in Kelvin.
    ///
    /// Bands are half-open `[lower, upper)`:
    ///
    /// | Type | Range (K) |
    /// |------|-----------|
    /// | M | 2400 – 3700 |
    /// | K | 3700 – 5200 |
    /// | G | 5200 – 6000 |
    /// | F | 6000 – 7500 |
    /// | A | 7500 – 10000 |
    /// | B | 10000 – 30000 |
    /// | O | ≥ 30000 |
    ///
    /// Returns `None` below 2400 K and for NaN.
    pub fn from_temperature(kelvin: f64) -> Option<Self> {
        match kelvin {
            t if t >= 30_000.0 => Some(SpectralType::O),
            t if t >= 10_000.0 => Some(SpectralType::B),
            t if t >= 7_500.0 => Some(SpectralType::A),
            t if t >= 6_000.0 => Some(SpectralType::F),
            t if t >= 5_200.0 => Some(SpectralType::G),
            t if t >= 3_700.0 => Some(SpectralType::K),
            t if t >= MIN_CLASSIFIED_TEMPERATURE_K => Some(SpectralType::M),
            _ => None,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}
