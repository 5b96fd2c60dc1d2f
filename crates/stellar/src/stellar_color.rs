//! Display colour of a blackbody at a given temperature.
//!
//! The pipeline is: Planckian-locus chromaticity (Kim et al. cubic spline fit)
//! → CIE XYZ at unit luminance → linear sRGB → gamma-encoded sRGB.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Lower limit of the Planckian-locus fit; the cubic has no branch below it.
pub const MIN_LOCUS_TEMPERATURE_K: f64 = 1667.0;

/// CIE 1931 chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Tristimulus values `[X, Y, Z]` at unit luminance `Y = 1`.
    ///
    /// `y = 0` has no defined XYZ; it maps to `X = Z = 0`.
    pub fn to_xyz(&self) -> [f64; 3] {
        let big_y = 1.0;
        if self.y == 0.0 {
            return [0.0, big_y, 0.0];
        }
        [
            self.x * big_y / self.y,
            big_y,
            (1.0 - self.x - self.y) * big_y / self.y,
        ]
    }
}

/// Chromaticity of a blackbody radiator at `kelvin`.
///
/// Temperatures below [`MIN_LOCUS_TEMPERATURE_K`] are raised to it. Above
/// 4000 K the hot branch is evaluated for any temperature. x switches branch
/// at 4000 K; y switches at 2222 K and 4000 K.
pub fn planckian_chromaticity(kelvin: f64) -> Chromaticity {
    let t = kelvin.max(MIN_LOCUS_TEMPERATURE_K);
    let (t2, t3) = (t * t, t * t * t);

    let x = if t <= 4000.0 {
        -0.2661239e9 / t3 - 0.2343580e6 / t2 + 0.8776956e3 / t + 0.179910
    } else {
        -3.0258469e9 / t3 + 2.1070379e6 / t2 + 0.2226347e3 / t + 0.240390
    };

    let (x2, x3) = (x * x, x * x * x);
    let y = if t <= 2222.0 {
        -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
    } else if t <= 4000.0 {
        -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
    };

    Chromaticity { x, y }
}

/// CIE XYZ → linear sRGB (D65) using the IEC 61966-2-1 matrix.
pub fn xyz_to_linear_srgb([x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        3.2406 * x - 1.5372 * y - 0.4986 * z,
        -0.9689 * x + 1.8758 * y + 0.0415 * z,
        0.0557 * x - 0.2040 * y + 1.0570 * z,
    ]
}

/// Linear → encoded transfer function applied per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub enum TransferCurve {
    /// Standard sRGB curve, power segment `c^(1/2.4)`.
    #[default]
    Srgb,
    /// sRGB shape with a squaring power segment, `c^2`.
    Squared,
}

impl TransferCurve {
    fn exponent(&self) -> f64 {
        match self {
            TransferCurve::Srgb => 1.0 / 2.4,
            TransferCurve::Squared => 2.0,
        }
    }

    /// Encode one linear channel value. Values are not clamped.
    pub fn encode(&self, linear: f64) -> f64 {
        if linear <= 0.0031308 {
            12.92 * linear
        } else {
            1.055 * linear.powf(self.exponent()) - 0.055
        }
    }
}

/// Gamma-encoded sRGB colour with unclamped floating point channels.
///
/// Channels are nominally in `[0, 1]` but exceed 1 for cool stars (red) and
/// hot stars (blue) because the blackbody is rendered at unit luminance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StellarColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl StellarColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Colour of a blackbody at `kelvin` with the standard sRGB curve.
    pub fn from_temperature(kelvin: f64) -> Self {
        Self::from_temperature_with(kelvin, TransferCurve::Srgb)
    }

    /// Colour of a blackbody at `kelvin` with an explicit transfer curve.
    pub fn from_temperature_with(kelvin: f64, curve: TransferCurve) -> Self {
        let xyz = planckian_chromaticity(kelvin).to_xyz();
        let [r, g, b] = xyz_to_linear_srgb(xyz);
        Self::new(curve.encode(r), curve.encode(g), curve.encode(b))
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Multiply every channel by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Multiply each channel by its own weight.
    pub fn weighted(&self, [wr, wg, wb]: [f64; 3]) -> Self {
        Self::new(self.r * wr, self.g * wg, self.b * wb)
    }

    /// Channels restricted to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// 8-bit channels after clamping.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamped();
        [c.r, c.g, c.b].map(|v| (v * 255.0).round() as u8)
    }

    /// `#RRGGBB` after clamping.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Free-function form of [`StellarColor::from_temperature`] returning `[r, g, b]`.
pub fn temperature_to_rgb(kelvin: f64) -> [f64; 3] {
    StellarColor::from_temperature(kelvin).to_array()
}
