//! B−V colour index ↔ effective temperature.
//!
//! Uses Ballesteros' (2012) blackbody fit,
//!
//! ```text
//! T = 4600 K · (1 / (0.92 (B−V) + 1.7) + 1 / (0.92 (B−V) + 0.62))
//! ```
//!
//! together with its closed-form inverse. The two are exact inverses of each
//! other over the supported colour range.

use units::Temperature;

/// Bluest colour index accepted by the interactive controls.
pub const MIN_COLOR_INDEX: f64 = -0.57;
/// Reddest colour index accepted by the interactive controls.
pub const MAX_COLOR_INDEX: f64 = 2.98;

/// Effective temperature for a B−V colour index.
pub fn temperature_from_color_index(bv: f64) -> Temperature {
    let scaled = 0.92 * bv;
    Temperature::from_kelvin(4600.0 * (1.0 / (scaled + 1.7) + 1.0 / (scaled + 0.62)))
}

/// B−V colour index for an effective temperature.
///
/// Positive root of the quadratic obtained by solving the Ballesteros
/// relation for B−V.
pub fn color_index_from_temperature(temperature: Temperature) -> f64 {
    let t = temperature.to_kelvin();
    ((729.0 * t * t + 5.29e10).sqrt() - 58.0 * t + 230_000.0) / (46.0 * t)
}
