use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use units::{Luminosity, Radius, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::anchor::{self, AnchorAxis, Resolution};
use crate::appearance::{Appearance, ViewSettings};
use crate::config::ModelConfig;
use crate::conventions::Conventions;
use crate::limits;
use crate::state::StarState;

/// A single-field edit of the star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum Edit {
    SurfaceTemp(f64),
    ColorIndex(f64),
    SolarLuminosity(f64),
    Luminosity1e26W(f64),
    AbsoluteMagnitude(f64),
    SolarRadius(f64),
    Radius1e5Km(f64),
    Fixed { axis: AnchorAxis, fixed: bool },
}

impl Edit {
    /// The Stefan–Boltzmann axis this edit changes, if any.
    pub fn axis(&self) -> Option<AnchorAxis> {
        match self {
            Edit::SurfaceTemp(_) | Edit::ColorIndex(_) => Some(AnchorAxis::Temperature),
            Edit::SolarLuminosity(_) | Edit::Luminosity1e26W(_) | Edit::AbsoluteMagnitude(_) => {
                Some(AnchorAxis::Luminosity)
            }
            Edit::SolarRadius(_) | Edit::Radius1e5Km(_) => Some(AnchorAxis::Radius),
            Edit::Fixed { .. } => None,
        }
    }

    /// The edit with its value clamped to the control range, or `None` for NaN.
    ///
    /// The 10⁵ km radius range depends on `conventions`.
    pub fn clamped(self, conventions: Conventions) -> Option<Edit> {
        let clamp = |value: f64, range: limits::Limits| {
            if value.is_nan() {
                None
            } else {
                Some(range.clamp(value))
            }
        };
        let edit = match self {
            Edit::SurfaceTemp(v) => Edit::SurfaceTemp(clamp(v, limits::SURFACE_TEMP_K)?),
            Edit::ColorIndex(v) => Edit::ColorIndex(clamp(v, limits::COLOR_INDEX_BV)?),
            Edit::SolarLuminosity(v) => {
                Edit::SolarLuminosity(clamp(v, limits::SOLAR_LUMINOSITY)?)
            }
            Edit::Luminosity1e26W(v) => {
                Edit::Luminosity1e26W(clamp(v, limits::LUMINOSITY_1E26_W)?)
            }
            Edit::AbsoluteMagnitude(v) => {
                Edit::AbsoluteMagnitude(clamp(v, limits::ABSOLUTE_MAGNITUDE)?)
            }
            Edit::SolarRadius(v) => Edit::SolarRadius(clamp(v, limits::SOLAR_RADIUS)?),
            Edit::Radius1e5Km(v) => {
                Edit::Radius1e5Km(clamp(v, conventions.radius_1e5_km_limits())?)
            }
            fixed @ Edit::Fixed { .. } => fixed,
        };
        Some(edit)
    }
}

/// What one applied edit did, as delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct StarChange {
    /// The edit after clamping
    pub edit: Edit,
    pub resolution: Resolution,
}

/// Receives every change applied to a [`StarModel`].
///
/// Implemented for any `FnMut(&StarState, &StarChange)`.
pub trait StarObserver {
    fn on_change(&mut self, state: &StarState, change: &StarChange);
}

impl<F> StarObserver for F
where
    F: FnMut(&StarState, &StarChange),
{
    fn on_change(&mut self, state: &StarState, change: &StarChange) {
        self(state, change)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);

/// One star whose temperature, luminosity and radius are kept consistent
/// under single-field edits.
///
/// # Example
///
/// ```rust
/// use star_model::{AnchorAxis, StarModel};
/// use stellar::SpectralType;
///
/// let mut model = StarModel::new();
/// assert!(model.state().rad_fixed());
///
/// model.set_surface_temp(5778.0);
/// assert!((model.state().solar_luminosity() - 1.0).abs() < 1e-9);
/// assert_eq!(model.state().spectral_type(), Some(SpectralType::G));
///
/// model.set_fixed(AnchorAxis::Luminosity, true);
/// model.set_solar_radius(2.0);
/// assert!(model.state().surface_temp_k() < 5778.0);
/// ```
pub struct StarModel {
    state: StarState,
    conventions: Conventions,
    observers: Vec<(SubscriptionId, Box<dyn StarObserver>)>,
    next_subscription: u32,
}

impl StarModel {
    /// Model with default values: 6000 K, 1 L☉, 1 R☉, radius anchored.
    pub fn new() -> Self {
        Self::with_config(&ModelConfig::default())
    }

    pub fn with_config(config: &ModelConfig) -> Self {
        Self {
            state: StarState::from_initial(&config.initial, config.conventions),
            conventions: config.conventions,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &StarState {
        &self.state
    }

    pub fn conventions(&self) -> Conventions {
        self.conventions
    }

    /// Renderer inputs for the current state.
    pub fn appearance(&self, view: &ViewSettings) -> Appearance {
        Appearance::from_state(&self.state, self.conventions.transfer_curve(), view)
    }

    pub fn set_surface_temp(&mut self, kelvin: f64) -> Option<StarChange> {
        self.apply(Edit::SurfaceTemp(kelvin))
    }

    pub fn set_color_index(&mut self, bv: f64) -> Option<StarChange> {
        self.apply(Edit::ColorIndex(bv))
    }

    pub fn set_solar_luminosity(&mut self, solar: f64) -> Option<StarChange> {
        self.apply(Edit::SolarLuminosity(solar))
    }

    pub fn set_luminosity_1e26_w(&mut self, watts_1e26: f64) -> Option<StarChange> {
        self.apply(Edit::Luminosity1e26W(watts_1e26))
    }

    pub fn set_absolute_magnitude(&mut self, magnitude: f64) -> Option<StarChange> {
        self.apply(Edit::AbsoluteMagnitude(magnitude))
    }

    pub fn set_solar_radius(&mut self, solar: f64) -> Option<StarChange> {
        self.apply(Edit::SolarRadius(solar))
    }

    pub fn set_radius_1e5_km(&mut self, radius_1e5_km: f64) -> Option<StarChange> {
        self.apply(Edit::Radius1e5Km(radius_1e5_km))
    }

    pub fn set_fixed(&mut self, axis: AnchorAxis, fixed: bool) -> Option<StarChange> {
        self.apply(Edit::Fixed { axis, fixed })
    }

    /// Apply one edit and run the resolver.
    ///
    /// Returns `None` when nothing changed: a NaN input, or releasing an axis
    /// that is not the anchor. Observers are notified only when `Some`.
    pub fn apply(&mut self, edit: Edit) -> Option<StarChange> {
        let Some(edit) = edit.clamped(self.conventions) else {
            warn!(?edit, "ignoring non-finite star edit");
            return None;
        };

        let resolution = match edit {
            Edit::Fixed { axis, fixed } => {
                let from = self.state.anchor();
                let to = anchor::toggle(from, axis, fixed);
                if from == to {
                    return None;
                }
                debug!(%from, %to, "anchor changed");
                self.state.set_anchor(to);
                Resolution::Reanchored { from, to }
            }
            _ => {
                self.write(edit);
                match edit.axis() {
                    Some(axis) => self.resolve(axis),
                    None => Resolution::Unchanged,
                }
            }
        };

        let change = StarChange { edit, resolution };
        trace!(?change, "star edit resolved");
        self.notify(&change);
        Some(change)
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: StarObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn write(&mut self, edit: Edit) {
        let km_factor = self.conventions.radius_edit_factor();
        let state = &mut self.state;
        match edit {
            Edit::SurfaceTemp(kelvin) => state.write_temperature(Temperature::from_kelvin(kelvin)),
            Edit::ColorIndex(bv) => state.write_color_index(bv),
            Edit::SolarLuminosity(solar) => state.write_luminosity(Luminosity::from_solar(solar)),
            Edit::Luminosity1e26W(w) => state.write_luminosity(Luminosity::from_1e26_watts(w)),
            Edit::AbsoluteMagnitude(m) => {
                state.write_luminosity(Luminosity::from_absolute_magnitude(m))
            }
            Edit::SolarRadius(solar) => {
                state.write_radius(Radius::from_solar_radii(solar), km_factor)
            }
            Edit::Radius1e5Km(km) => state.write_radius_km(km, km_factor),
            Edit::Fixed { .. } => {}
        }
    }

    fn resolve(&mut self, edited: AnchorAxis) -> Resolution {
        let resolution = anchor::resolve(edited, self.state.anchor());
        let (t, l, r) = (
            self.state.temperature(),
            self.state.luminosity(),
            self.state.radius(),
        );
        match resolution {
            Resolution::Recomputed { axis: AnchorAxis::Temperature } => {
                self.state.write_temperature(self.conventions.temperature(l, r));
            }
            Resolution::Recomputed { axis: AnchorAxis::Luminosity } => {
                self.state.write_luminosity(self.conventions.luminosity(r, t));
            }
            Resolution::Recomputed { axis: AnchorAxis::Radius } => {
                let km_factor = self.conventions.radius_recompute_factor();
                self.state.write_radius(self.conventions.radius(l, t), km_factor);
            }
            Resolution::Reanchored { from, to } => {
                debug!(%from, %to, "edited the fixed axis; anchor corrected");
                self.state.set_anchor(to);
            }
            Resolution::Unchanged => {}
        }
        resolution
    }

    fn notify(&mut self, change: &StarChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(&self.state, change);
        }
    }
}

impl Default for StarModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StarModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StarModel")
            .field("state", &self.state)
            .field("conventions", &self.conventions)
            .field("observers", &self.observers.len())
            .finish()
    }
}
