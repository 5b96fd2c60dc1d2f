use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use stellar::stefan_boltzmann::relative_residual;
use stellar::SpectralType;

use crate::anchor::{AnchorAxis, Resolution};
use crate::config::{InitialState, ModelConfig};
use crate::conventions::Conventions;
use crate::model::{Edit, StarChange, StarModel};

fn legacy() -> StarModel {
    StarModel::with_config(&ModelConfig {
        conventions: Conventions::Legacy,
        ..ModelConfig::default()
    })
}

fn sb_residual(model: &StarModel) -> f64 {
    let s = model.state();
    relative_residual(s.luminosity(), s.radius(), s.temperature())
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn default_state() {
    let model = StarModel::new();
    let s = model.state();

    assert_relative_eq!(s.surface_temp_k(), 6000.0);
    assert_relative_eq!(s.color_index_bv(), 0.5918, epsilon = 1e-3);
    assert_eq!(s.spectral_type(), Some(SpectralType::F));
    assert_relative_eq!(s.solar_luminosity(), 1.0);
    assert_relative_eq!(s.luminosity_1e26_w(), 3.828);
    assert_relative_eq!(s.absolute_magnitude(), 4.83);
    assert_relative_eq!(s.solar_radius(), 1.0);
    assert_relative_eq!(s.radius_1e5_km(), 6.9634);

    assert!(s.rad_fixed());
    assert!(!s.temp_fixed());
    assert!(!s.lum_fixed());
}

#[test]
fn initial_state_from_config() {
    let model = StarModel::with_config(&ModelConfig {
        conventions: Conventions::Consistent,
        initial: InitialState {
            surface_temp_k: 3500.0,
            solar_luminosity: 0.5,
            solar_radius: 2.0,
            anchor: AnchorAxis::Temperature,
        },
    });
    let s = model.state();

    assert_eq!(s.spectral_type(), Some(SpectralType::M));
    assert_relative_eq!(s.luminosity_1e26_w(), 1.914);
    assert_relative_eq!(s.radius_1e5_km(), 13.9268);
    assert!(s.temp_fixed());
}

// ============================================================================
// Temperature edits
// ============================================================================

#[test]
fn solar_temperature_with_radius_fixed_gives_solar_luminosity() {
    let mut model = StarModel::new();
    let change = model.set_surface_temp(5778.0).unwrap();

    assert_eq!(
        change.resolution,
        Resolution::Recomputed {
            axis: AnchorAxis::Luminosity
        }
    );
    let s = model.state();
    assert_relative_eq!(s.solar_luminosity(), 1.0, epsilon = 1e-9);
    assert_eq!(s.spectral_type(), Some(SpectralType::G));
    assert_relative_eq!(s.color_index_bv(), 0.656, epsilon = 0.01);
    assert_relative_eq!(s.absolute_magnitude(), 4.83, epsilon = 1e-9);
}

#[test]
fn temperature_edit_with_luminosity_fixed_recomputes_radius() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Luminosity, true);
    model.set_surface_temp(3000.0);

    let s = model.state();
    let expected = 1.0 / (3000.0_f64 / 5778.0).powi(2);
    assert_relative_eq!(s.solar_luminosity(), 1.0);
    assert_relative_eq!(s.solar_radius(), expected, max_relative = 1e-12);
    assert_relative_eq!(s.radius_1e5_km(), expected * 6.9634, max_relative = 1e-12);
    assert!(sb_residual(&model) < 1e-6);
}

#[test]
fn color_index_edit_drives_temperature() {
    let mut model = StarModel::new();
    model.set_color_index(0.0);

    let s = model.state();
    let expected_t = 4600.0 * (1.0 / 1.7 + 1.0 / 0.62);
    assert_relative_eq!(s.color_index_bv(), 0.0);
    assert_relative_eq!(s.surface_temp_k(), expected_t, max_relative = 1e-12);
    assert_eq!(s.spectral_type(), Some(SpectralType::B));
    assert!(sb_residual(&model) < 1e-6);
}

// ============================================================================
// Luminosity edits
// ============================================================================

#[test]
fn luminosity_edit_with_radius_fixed_recomputes_temperature() {
    let mut model = StarModel::new();
    model.set_solar_luminosity(10.0);

    let s = model.state();
    assert_relative_eq!(s.luminosity_1e26_w(), 38.28, max_relative = 1e-12);
    assert_relative_eq!(s.absolute_magnitude(), 2.33, epsilon = 1e-9);
    assert_relative_eq!(
        s.surface_temp_k(),
        5778.0 * 10f64.powf(0.25),
        max_relative = 1e-12
    );
    assert_eq!(s.spectral_type(), Some(SpectralType::B));
    assert!(sb_residual(&model) < 1e-6);
}

#[test]
fn luminosity_entry_points_agree() {
    let mut by_solar = StarModel::new();
    let mut by_watts = StarModel::new();
    let mut by_magnitude = StarModel::new();

    by_solar.set_solar_luminosity(100.0);
    by_watts.set_luminosity_1e26_w(382.8);
    by_magnitude.set_absolute_magnitude(-0.17);

    for model in [&by_watts, &by_magnitude] {
        let s = model.state();
        assert_relative_eq!(s.solar_luminosity(), 100.0, max_relative = 1e-9);
        assert_relative_eq!(s.luminosity_1e26_w(), 382.8, max_relative = 1e-9);
        assert_relative_eq!(s.absolute_magnitude(), -0.17, epsilon = 1e-9);
        assert_relative_eq!(
            s.surface_temp_k(),
            by_solar.state().surface_temp_k(),
            max_relative = 1e-9
        );
    }
}

#[test]
fn luminosity_edit_with_temperature_fixed_recomputes_radius() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Temperature, true);
    model.set_solar_luminosity(4.0);

    let s = model.state();
    assert_relative_eq!(s.surface_temp_k(), 6000.0);
    assert_relative_eq!(
        s.solar_radius(),
        2.0 / (6000.0_f64 / 5778.0).powi(2),
        max_relative = 1e-12
    );
    assert!(sb_residual(&model) < 1e-6);
}

// ============================================================================
// Radius edits
// ============================================================================

#[test]
fn radius_edit_with_temperature_fixed_recomputes_luminosity() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Temperature, true);
    model.set_solar_radius(3.0);

    let s = model.state();
    let expected = 9.0 * (6000.0_f64 / 5778.0).powi(4);
    assert_relative_eq!(s.solar_luminosity(), expected, max_relative = 1e-12);
    assert!(sb_residual(&model) < 1e-6);
}

#[test]
fn radius_edit_with_luminosity_fixed_recomputes_temperature() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Luminosity, true);
    model.set_radius_1e5_km(2.0 * 6.9634);

    let s = model.state();
    assert_relative_eq!(s.solar_radius(), 2.0, max_relative = 1e-12);
    assert_relative_eq!(
        s.surface_temp_k(),
        5778.0 * 0.25f64.powf(0.25),
        max_relative = 1e-12
    );
    assert_eq!(s.spectral_type(), Some(SpectralType::K));
}

#[test]
fn recomputed_values_are_not_clamped() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Temperature, true);
    model.set_solar_radius(15.0);
    model.set_fixed(AnchorAxis::Radius, true);
    model.set_solar_luminosity(0.3);

    let s = model.state();
    assert!(s.surface_temp_k() < 2400.0);
    assert_eq!(s.spectral_type(), None);
}

// ============================================================================
// Anchor correction
// ============================================================================

#[test]
fn fixing_temperature_then_editing_it_restores_radius_anchor() {
    let mut model = StarModel::new();
    let before = model.state().clone();
    model.set_fixed(AnchorAxis::Temperature, true);
    // Fixing only moves the anchor; nothing is recomputed yet
    assert!(model.state().temp_fixed());
    assert!(!model.state().rad_fixed());
    assert_relative_eq!(model.state().surface_temp_k(), before.surface_temp_k());
    assert_relative_eq!(model.state().solar_luminosity(), before.solar_luminosity());
    assert_relative_eq!(model.state().solar_radius(), before.solar_radius());

    let change = model.set_surface_temp(7000.0).unwrap();
    assert_eq!(
        change.resolution,
        Resolution::Reanchored {
            from: AnchorAxis::Temperature,
            to: AnchorAxis::Radius
        }
    );

    let s = model.state();
    assert!(!s.temp_fixed());
    assert!(s.rad_fixed());
    // Correction does not recompute anything
    assert_relative_eq!(s.surface_temp_k(), 7000.0);
    assert_relative_eq!(s.solar_luminosity(), 1.0);
    assert_relative_eq!(s.solar_radius(), 1.0);
}

#[test]
fn editing_fixed_luminosity_restores_radius_anchor() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Luminosity, true);
    model.set_absolute_magnitude(2.0);

    assert!(model.state().rad_fixed());
    assert_relative_eq!(model.state().surface_temp_k(), 6000.0);
}

#[test]
fn editing_fixed_radius_moves_anchor_to_luminosity() {
    let mut model = StarModel::new();
    model.set_solar_radius(4.0);

    let s = model.state();
    assert!(s.lum_fixed());
    assert_relative_eq!(s.solar_radius(), 4.0);
    assert_relative_eq!(s.solar_luminosity(), 1.0);
}

#[test]
fn releasing_flags() {
    let mut model = StarModel::new();

    let change = model.set_fixed(AnchorAxis::Radius, false).unwrap();
    assert_eq!(
        change.resolution,
        Resolution::Reanchored {
            from: AnchorAxis::Radius,
            to: AnchorAxis::Luminosity
        }
    );

    // Temperature is not the anchor, so releasing it is a no-op
    assert!(model.set_fixed(AnchorAxis::Temperature, false).is_none());
    assert!(model.state().lum_fixed());

    model.set_fixed(AnchorAxis::Luminosity, false);
    assert!(model.state().rad_fixed());

    // Fixing the current anchor again changes nothing
    assert!(model.set_fixed(AnchorAxis::Radius, true).is_none());
}

// ============================================================================
// Radius conventions
// ============================================================================

#[test]
fn consistent_radius_round_trip() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Temperature, true);
    model.set_solar_radius(2.5);
    assert_relative_eq!(model.state().radius_1e5_km(), 2.5 * 6.9634, max_relative = 1e-12);

    let km = model.state().radius_1e5_km();
    model.set_radius_1e5_km(km);
    assert_relative_eq!(model.state().solar_radius(), 2.5, max_relative = 1e-12);
}

#[test]
fn legacy_radius_round_trip_uses_edit_factor() {
    let mut model = legacy();
    model.set_fixed(AnchorAxis::Temperature, true);
    model.set_solar_radius(2.0);
    assert_relative_eq!(model.state().radius_1e5_km(), 2.0 * 6.6934, max_relative = 1e-12);

    model.set_radius_1e5_km(2.0 * 6.6934);
    assert_relative_eq!(model.state().solar_radius(), 2.0, max_relative = 1e-12);
}

#[test]
fn legacy_recomputed_radius_uses_canonical_factor() {
    let mut model = legacy();
    model.set_fixed(AnchorAxis::Luminosity, true);
    model.set_surface_temp(5778.0);

    let s = model.state();
    assert_relative_eq!(s.solar_radius(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(s.radius_1e5_km(), 6.9634, max_relative = 1e-12);
}

#[test]
fn legacy_luminosity_uses_si_form() {
    let mut model = legacy();
    model.set_surface_temp(5778.0);

    let l = model.state().solar_luminosity();
    assert_relative_eq!(l, 1.0, epsilon = 0.01);
    assert!(l > 1.0);
}

#[test]
fn legacy_temperature_is_linear() {
    let mut model = legacy();
    model.set_solar_luminosity(2.0);
    assert_relative_eq!(model.state().surface_temp_k(), 2.0 * 5778.0, max_relative = 1e-12);
}

// ============================================================================
// Clamping and ignored input
// ============================================================================

#[test]
fn inputs_are_clamped() {
    let mut model = StarModel::new();

    let change = model.set_surface_temp(100_000.0).unwrap();
    assert_eq!(change.edit, Edit::SurfaceTemp(50_000.0));
    assert_eq!(model.state().spectral_type(), Some(SpectralType::O));

    model.set_fixed(AnchorAxis::Temperature, true);
    let change = model.set_solar_radius(0.1).unwrap();
    assert_eq!(change.edit, Edit::SolarRadius(0.5));

    let change = model.set_absolute_magnitude(-20.0).unwrap();
    assert_eq!(change.edit, Edit::AbsoluteMagnitude(-4.5));

    let change = model.set_color_index(5.0).unwrap();
    assert_eq!(change.edit, Edit::ColorIndex(2.98));
}

#[test]
fn km_radius_edits_stay_within_solar_radius_range() {
    let mut model = StarModel::new();
    model.set_fixed(AnchorAxis::Temperature, true);

    model.set_radius_1e5_km(3.3);
    assert_relative_eq!(model.state().solar_radius(), 0.5, max_relative = 1e-12);

    model.set_radius_1e5_km(200.0);
    assert_relative_eq!(model.state().solar_radius(), 15.0, max_relative = 1e-12);
}

#[test]
fn legacy_km_radius_edits_keep_slider_range() {
    let mut model = legacy();
    model.set_fixed(AnchorAxis::Temperature, true);

    let change = model.set_radius_1e5_km(1.0).unwrap();
    assert_eq!(change.edit, Edit::Radius1e5Km(3.3));
    assert!(model.state().solar_radius() < 0.5);
}

#[test]
fn nan_input_is_ignored() {
    let mut model = StarModel::new();
    let before = model.state().clone();

    assert!(model.set_surface_temp(f64::NAN).is_none());
    assert!(model.set_radius_1e5_km(f64::NAN).is_none());
    assert_eq!(model.state(), &before);
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn observers_see_the_updated_state() {
    let mut model = StarModel::new();
    let seen: Rc<RefCell<Vec<(f64, StarChange)>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    model.subscribe(move |state: &crate::StarState, change: &StarChange| {
        sink.borrow_mut().push((state.solar_luminosity(), *change));
    });

    model.set_surface_temp(5778.0);
    model.set_surface_temp(f64::NAN);
    model.set_fixed(AnchorAxis::Temperature, false);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_relative_eq!(seen[0].0, 1.0, epsilon = 1e-9);
    assert_eq!(seen[0].1.edit, Edit::SurfaceTemp(5778.0));
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut model = StarModel::new();
    let count = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&count);
    let id = model.subscribe(move |_: &crate::StarState, _: &StarChange| {
        *counter.borrow_mut() += 1;
    });
    let other = model.subscribe(|_: &crate::StarState, _: &StarChange| {});
    assert_ne!(id, other);

    model.set_solar_luminosity(2.0);
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    model.set_solar_luminosity(3.0);

    assert_eq!(*count.borrow(), 1);
}
