//! Fixed-axis bookkeeping and the constraint resolver.
//!
//! Of temperature, luminosity and radius exactly one is the anchor. After an
//! edit to one axis, the third axis (neither edited nor anchored) is
//! recomputed from the other two. Editing the anchored axis itself moves the
//! anchor to a fallback axis instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::{ModelError, ModelResult};

/// The three linked quantities of the Stefan–Boltzmann relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub enum AnchorAxis {
    Temperature,
    Luminosity,
    #[default]
    Radius,
}

impl AnchorAxis {
    pub const ALL: [AnchorAxis; 3] = [
        AnchorAxis::Temperature,
        AnchorAxis::Luminosity,
        AnchorAxis::Radius,
    ];

    /// Where the anchor goes when this axis is released or edited while fixed.
    pub fn fallback(&self) -> AnchorAxis {
        match self {
            AnchorAxis::Temperature | AnchorAxis::Luminosity => AnchorAxis::Radius,
            AnchorAxis::Radius => AnchorAxis::Luminosity,
        }
    }

    /// The axis that is neither `self` nor `other`.
    ///
    /// Only meaningful for two distinct axes; equal inputs return `self`.
    pub fn third(&self, other: AnchorAxis) -> AnchorAxis {
        match (self, other) {
            (AnchorAxis::Temperature, AnchorAxis::Luminosity)
            | (AnchorAxis::Luminosity, AnchorAxis::Temperature) => AnchorAxis::Radius,
            (AnchorAxis::Temperature, AnchorAxis::Radius)
            | (AnchorAxis::Radius, AnchorAxis::Temperature) => AnchorAxis::Luminosity,
            (AnchorAxis::Luminosity, AnchorAxis::Radius)
            | (AnchorAxis::Radius, AnchorAxis::Luminosity) => AnchorAxis::Temperature,
            (axis, _) => *axis,
        }
    }
}

impl fmt::Display for AnchorAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            AnchorAxis::Temperature => "temperature",
            AnchorAxis::Luminosity => "luminosity",
            AnchorAxis::Radius => "radius",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for AnchorAxis {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(AnchorAxis::Temperature),
            "luminosity" | "lum" | "l" => Ok(AnchorAxis::Luminosity),
            "radius" | "rad" | "r" => Ok(AnchorAxis::Radius),
            _ => Err(ModelError::UnknownAxis(s.to_string())),
        }
    }
}

/// Outcome of resolving one edit against the current anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Resolution {
    /// The free axis was recomputed from the other two.
    Recomputed { axis: AnchorAxis },
    /// The anchor moved; nothing was recomputed.
    Reanchored { from: AnchorAxis, to: AnchorAxis },
    /// Nothing beyond the edit itself changed.
    Unchanged,
}

/// Decide what an edit to `edited` implies when `anchor` is fixed.
///
/// | edited \ anchor | Temperature | Luminosity | Radius |
/// |---|---|---|---|
/// | Temperature | reanchor → Radius | recompute Radius | recompute Luminosity |
/// | Luminosity | recompute Radius | reanchor → Radius | recompute Temperature |
/// | Radius | recompute Luminosity | recompute Temperature | reanchor → Luminosity |
pub fn resolve(edited: AnchorAxis, anchor: AnchorAxis) -> Resolution {
    if edited == anchor {
        Resolution::Reanchored {
            from: anchor,
            to: anchor.fallback(),
        }
    } else {
        Resolution::Recomputed {
            axis: edited.third(anchor),
        }
    }
}

/// New anchor after toggling the fixed flag of `axis`.
///
/// Fixing an axis makes it the anchor. Releasing the current anchor moves it
/// to [`AnchorAxis::fallback`]; releasing any other axis changes nothing.
/// Toggling never recomputes a value: fixing an axis only moves the anchor,
/// and the correction from [`resolve`] fires on the next edit of that axis.
pub fn toggle(anchor: AnchorAxis, axis: AnchorAxis, fixed: bool) -> AnchorAxis {
    match (fixed, axis == anchor) {
        (true, _) => axis,
        (false, true) => axis.fallback(),
        (false, false) => anchor,
    }
}
