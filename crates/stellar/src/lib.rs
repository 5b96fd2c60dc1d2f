//! Closed-form stellar relations used by the interactive star model.

pub mod photometry;
pub mod spectral;
pub mod stefan_boltzmann;
pub mod stellar_color;

#[cfg(test)]
mod stellar_color_test;

// Re-export spectral types
pub use spectral::SpectralType;

// Re-export color
pub use stellar_color::{temperature_to_rgb, StellarColor, TransferCurve};

// Re-export photometry
pub use photometry::{color_index_from_temperature, temperature_from_color_index};
