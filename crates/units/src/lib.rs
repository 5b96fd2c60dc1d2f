//! Typed physical quantities for a single star's linked parameters.

pub mod luminosity;
pub mod radius;
pub mod temperature;


pub use luminosity::{
    Luminosity, SOLAR_ABSOLUTE_MAGNITUDE, SOLAR_LUMINOSITY_1E26_W, SOLAR_LUMINOSITY_W,
};
pub use radius::{Radius, SOLAR_RADIUS_1E5_KM, SOLAR_RADIUS_M};
pub use temperature::{Temperature, SOLAR_TEMPERATURE_K};
