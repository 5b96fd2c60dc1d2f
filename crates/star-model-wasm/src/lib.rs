//! WASM bindings for the interactive star model.
//!
//! This crate exposes [`star_model::StarModel`] to a browser renderer. Models
//! live in thread-local storage (WASM is single-threaded) and are referenced
//! by opaque IDs. Every edit returns the new state snapshot so the host can
//! re-render in one round trip.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const starId = star_create();
//!
//! // Slider moved: temperature edited, luminosity follows (radius is fixed)
//! let state = star_set_surface_temp(starId, 5778);
//! console.log(state.solarLuminosity, state.spectralType);
//!
//! // "Fixed" checkbox on the luminosity folder
//! state = star_set_fixed(starId, "luminosity", true);
//!
//! // Renderer inputs
//! const look = star_appearance(starId, { showOrbit: false, realScale: false });
//! bloomPass.strength = look.bloomStrength;
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use star_model::{
    AnchorAxis, Appearance, Edit, ModelConfig, SpectralType, StarModel, StarState, ViewSettings,
};

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Thread-local storage for star models
// =============================================================================

thread_local! {
    static MODELS: RefCell<HashMap<u32, StarModel>> = RefCell::new(HashMap::new());
    static NEXT_STAR_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn insert(model: StarModel) -> u32 {
    let id = NEXT_STAR_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    MODELS.with(|models| {
        models.borrow_mut().insert(id, model);
    });

    id
}

fn with_model<R>(star_id: u32, f: impl FnOnce(&mut StarModel) -> R) -> Option<R> {
    MODELS.with(|models| models.borrow_mut().get_mut(&star_id).map(f))
}

fn require<R>(star_id: u32, f: impl FnOnce(&mut StarModel) -> R) -> Result<R, JsError> {
    with_model(star_id, f).ok_or_else(|| JsError::new(&format!("Star {} not found", star_id)))
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// State snapshot with the fixed flags spelled out for checkbox binding.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSnapshot {
    pub surface_temp_k: f64,
    pub color_index_bv: f64,
    /// Single letter, or null below the coolest band
    pub spectral_type: Option<SpectralType>,
    pub solar_luminosity: f64,
    pub luminosity_1e26_w: f64,
    pub absolute_magnitude: f64,
    pub solar_radius: f64,
    pub radius_1e5_km: f64,
    pub anchor: AnchorAxis,
    pub temp_fixed: bool,
    pub lum_fixed: bool,
    pub rad_fixed: bool,
}

impl From<&StarState> for StarSnapshot {
    fn from(state: &StarState) -> Self {
        Self {
            surface_temp_k: state.surface_temp_k(),
            color_index_bv: state.color_index_bv(),
            spectral_type: state.spectral_type(),
            solar_luminosity: state.solar_luminosity(),
            luminosity_1e26_w: state.luminosity_1e26_w(),
            absolute_magnitude: state.absolute_magnitude(),
            solar_radius: state.solar_radius(),
            radius_1e5_km: state.radius_1e5_km(),
            anchor: state.anchor(),
            temp_fixed: state.temp_fixed(),
            lum_fixed: state.lum_fixed(),
            rad_fixed: state.rad_fixed(),
        }
    }
}

fn edit(star_id: u32, edit: Edit) -> Result<JsValue, JsError> {
    let snapshot = require(star_id, |model| {
        model.apply(edit);
        StarSnapshot::from(model.state())
    })?;
    to_js(&snapshot)
}

// =============================================================================
// Model management
// =============================================================================

/// Create a star with default values (6000 K, 1 L☉, 1 R☉, radius fixed).
///
/// Returns a star ID for use with other functions.
#[wasm_bindgen]
pub fn star_create() -> u32 {
    insert(StarModel::new())
}

/// Create a star from a configuration object.
///
/// # Arguments
/// * `config` - `{ conventions?: "consistent" | "legacy", initial?: { surfaceTempK, solarLuminosity, solarRadius, anchor } }`
#[wasm_bindgen]
pub fn star_create_with_config(config: JsValue) -> Result<u32, JsError> {
    let config: ModelConfig = from_js(config)?;
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    tracing::debug!(?config, "creating star from config");
    Ok(insert(StarModel::with_config(&config)))
}

/// Create a star from a JSON configuration string.
#[wasm_bindgen]
pub fn star_create_from_json(json: &str) -> Result<u32, JsError> {
    let config = ModelConfig::from_json_str(json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(insert(StarModel::with_config(&config)))
}

/// Delete a star to free memory.
#[wasm_bindgen]
pub fn star_delete(star_id: u32) {
    MODELS.with(|models| {
        models.borrow_mut().remove(&star_id);
    });
}

// =============================================================================
// Reading state
// =============================================================================

/// Current state snapshot.
#[wasm_bindgen]
pub fn star_state(star_id: u32) -> Result<JsValue, JsError> {
    let snapshot = require(star_id, |model| StarSnapshot::from(model.state()))?;
    to_js(&snapshot)
}

/// Renderer inputs (colors, scales, bloom, reference orbit).
///
/// `bloomStrength` is never negative. Stars dimmer than about 0.316 L☉ get
/// zero, so the bloom pass should treat zero as "off".
///
/// # Arguments
/// * `star_id` - Star ID
/// * `view` - `{ showOrbit?: boolean, realScale?: boolean }`
#[wasm_bindgen]
pub fn star_appearance(star_id: u32, view: JsValue) -> Result<JsValue, JsError> {
    let view: ViewSettings = if view.is_undefined() || view.is_null() {
        ViewSettings::default()
    } else {
        from_js(view)?
    };
    let appearance: Appearance = require(star_id, |model| model.appearance(&view))?;
    to_js(&appearance)
}

/// Blackbody display color `[r, g, b]` for a temperature in Kelvin.
///
/// Channels are not clamped.
#[wasm_bindgen]
pub fn temperature_to_rgb(kelvin: f64) -> Vec<f64> {
    star_model::temperature_to_rgb(kelvin).to_vec()
}

// =============================================================================
// Edits
// =============================================================================

#[wasm_bindgen]
pub fn star_set_surface_temp(star_id: u32, kelvin: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::SurfaceTemp(kelvin))
}

#[wasm_bindgen]
pub fn star_set_color_index(star_id: u32, bv: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::ColorIndex(bv))
}

#[wasm_bindgen]
pub fn star_set_solar_luminosity(star_id: u32, solar: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::SolarLuminosity(solar))
}

#[wasm_bindgen]
pub fn star_set_luminosity_1e26_w(star_id: u32, watts_1e26: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::Luminosity1e26W(watts_1e26))
}

#[wasm_bindgen]
pub fn star_set_absolute_magnitude(star_id: u32, magnitude: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::AbsoluteMagnitude(magnitude))
}

#[wasm_bindgen]
pub fn star_set_solar_radius(star_id: u32, solar: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::SolarRadius(solar))
}

#[wasm_bindgen]
pub fn star_set_radius_1e5_km(star_id: u32, radius_1e5_km: f64) -> Result<JsValue, JsError> {
    edit(star_id, Edit::Radius1e5Km(radius_1e5_km))
}

/// Toggle the fixed flag of one axis.
///
/// # Arguments
/// * `star_id` - Star ID
/// * `axis` - "temperature", "luminosity" or "radius" (short forms accepted)
/// * `fixed` - New checkbox value
#[wasm_bindgen]
pub fn star_set_fixed(star_id: u32, axis: &str, fixed: bool) -> Result<JsValue, JsError> {
    let axis: AnchorAxis = axis
        .parse()
        .map_err(|e: star_model::ModelError| JsError::new(&e.to_string()))?;
    edit(star_id, Edit::Fixed { axis, fixed })
}

#[cfg(test)]
mod tests {
    use super::*;

    // JsValue conversions need a wasm runtime; these cover the storage layer.

    #[test]
    fn snapshot_spells_out_flags() {
        let model = StarModel::new();
        let snapshot = StarSnapshot::from(model.state());

        assert!(snapshot.rad_fixed);
        assert!(!snapshot.temp_fixed);
        assert!(!snapshot.lum_fixed);
        assert_eq!(snapshot.anchor, AnchorAxis::Radius);
        assert_eq!(snapshot.spectral_type, Some(SpectralType::F));
    }

    #[test]
    fn models_are_isolated_by_id() {
        let a = star_create();
        let b = star_create();
        assert_ne!(a, b);

        with_model(a, |model| model.set_surface_temp(5778.0));

        let temp_a = with_model(a, |model| model.state().surface_temp_k());
        let temp_b = with_model(b, |model| model.state().surface_temp_k());
        assert_eq!(temp_a, Some(5778.0));
        assert_eq!(temp_b, Some(6000.0));

        star_delete(a);
        assert!(with_model(a, |_| ()).is_none());
        star_delete(b);
    }
}
