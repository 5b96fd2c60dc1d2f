//! Interactive model of one star's temperature, luminosity and radius.
//!
//! [`StarModel`] owns a [`StarState`] and keeps it consistent under
//! single-field edits: after each edit the axis that is neither edited nor
//! anchored is recomputed from the Stefan–Boltzmann relation. The host layer
//! reads the state, subscribes to changes, and derives renderer inputs
//! through [`Appearance`].

pub mod anchor;
pub mod appearance;
pub mod config;
pub mod conventions;
pub mod error;
pub mod limits;
pub mod model;
pub mod state;

#[cfg(test)]
mod model_test;

pub use anchor::{resolve, AnchorAxis, Resolution};
pub use appearance::{Appearance, ReferenceOrbit, ViewSettings};
pub use config::{InitialState, ModelConfig};
pub use conventions::Conventions;
pub use error::{ModelError, ModelResult};
pub use model::{Edit, StarChange, StarModel, StarObserver, SubscriptionId};
pub use state::StarState;

// Re-export the pure colour function for hosts
pub use stellar::{temperature_to_rgb, SpectralType, StellarColor};
