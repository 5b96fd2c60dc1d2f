use approx::assert_relative_eq;

use crate::stellar_color::{
    planckian_chromaticity, temperature_to_rgb, Chromaticity, StellarColor, TransferCurve,
    MIN_LOCUS_TEMPERATURE_K,
};

fn max_channel_difference(a: StellarColor, b: StellarColor) -> f64 {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn stellar_color_from_temperature() {
    // Hot B-type star - should be blue-white
    let hot = StellarColor::from_temperature(25000.0);
    assert!(hot.b > hot.r, "Hot stars should have more blue than red");

    // Sun-like G-type star - should be yellowish-white
    let solar = StellarColor::from_temperature(5778.0);
    assert!(solar.r > solar.b, "Solar-type should have more red than blue");
    assert!(solar.g > solar.b, "Solar-type should have more green than blue");

    // Cool M-type star - should be reddish
    let cool = StellarColor::from_temperature(3000.0);
    assert!(cool.r > cool.b, "Cool stars should have more red than blue");
    assert!(cool.r > cool.g, "Cool stars should have more red than green");

    assert!(
        hot.b / hot.r > solar.b / solar.r,
        "Blue/red ratio should increase with temperature"
    );
}

#[test]
fn solar_chromaticity_is_near_white_point() {
    let c = planckian_chromaticity(5778.0);
    assert_relative_eq!(c.x, 0.3263, epsilon = 1e-3);
    assert_relative_eq!(c.y, 0.3357, epsilon = 1e-3);
}

#[test]
fn continuity_across_x_branch() {
    let below = StellarColor::from_temperature(3999.0);
    let at = StellarColor::from_temperature(4000.0);
    let above = StellarColor::from_temperature(4001.0);

    assert!(max_channel_difference(below, above) < 0.01);
    assert!(max_channel_difference(at, above) < 0.01);
}

#[test]
fn continuity_across_cool_y_branch() {
    let below = StellarColor::from_temperature(2221.0);
    let above = StellarColor::from_temperature(2223.0);
    assert!(max_channel_difference(below, above) < 0.01);

    let a = planckian_chromaticity(2222.0);
    let b = planckian_chromaticity(2222.0 + 1e-6);
    assert!((a.y - b.y).abs() < 1e-4);
}

#[test]
fn cold_temperatures_clamped_to_locus_minimum() {
    // Below the fit there is no branch; clamp rather than produce NaN
    let very_cold = StellarColor::from_temperature(100.0);

    assert_eq!(very_cold, StellarColor::from_temperature(MIN_LOCUS_TEMPERATURE_K));
    assert!(very_cold.to_array().iter().all(|c| c.is_finite()));
}

#[test]
fn hot_branch_keeps_varying_above_25000k() {
    let b_star = StellarColor::from_temperature(30000.0);
    let o_star = StellarColor::from_temperature(50000.0);
    let very_hot = StellarColor::from_temperature(100000.0);

    assert_ne!(b_star, o_star);
    assert!(max_channel_difference(b_star, o_star) > 1e-3);
    assert!(very_hot.to_array().iter().all(|c| c.is_finite()));
    assert!(o_star.b >= o_star.r);
    assert!(very_hot.b >= very_hot.r);
}

#[test]
fn output_is_not_clamped() {
    // Unit luminance pushes the dominant channel of a cool star above 1
    let cool = StellarColor::from_temperature(2400.0);
    assert!(cool.r > 1.0);

    let clamped = cool.clamped();
    assert_relative_eq!(clamped.r, 1.0);
    assert!(clamped.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn zero_y_chromaticity_yields_zero_xz() {
    let degenerate = Chromaticity { x: 0.3, y: 0.0 };
    assert_eq!(degenerate.to_xyz(), [0.0, 1.0, 0.0]);
}

#[test]
fn transfer_curves() {
    // Linear toe is shared by both curves
    assert_relative_eq!(TransferCurve::Srgb.encode(0.001), 0.01292);
    assert_relative_eq!(TransferCurve::Squared.encode(0.001), 0.01292);

    assert_relative_eq!(TransferCurve::Srgb.encode(1.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(TransferCurve::Squared.encode(1.0), 1.0, epsilon = 1e-12);

    // Squared power segment darkens mid tones
    assert!(TransferCurve::Squared.encode(0.5) < TransferCurve::Srgb.encode(0.5));
    assert_relative_eq!(TransferCurve::Squared.encode(0.5), 1.055 * 0.25 - 0.055);
}

#[test]
fn free_function_matches_method() {
    let color = StellarColor::from_temperature(7200.0);
    assert_eq!(temperature_to_rgb(7200.0), color.to_array());
}

#[test]
fn stellar_color_hex() {
    let color = StellarColor::new(1.0, 128.0 / 255.0, 64.0 / 255.0);
    assert_eq!(color.to_hex(), "#FF8040");

    let black = StellarColor::new(0.0, 0.0, 0.0);
    assert_eq!(black.to_hex(), "#000000");

    // Out of range channels clamp before quantising
    let hot = StellarColor::new(1.7, -0.2, 1.0);
    assert_eq!(hot.to_rgb8(), [255, 0, 255]);
}

#[test]
fn scaling_helpers() {
    let color = StellarColor::new(0.2, 0.4, 0.5);
    assert_eq!(color.scaled(2.0), StellarColor::new(0.4, 0.8, 1.0));

    let weighted = color.weighted([1.0, 0.5, 2.0]);
    assert_relative_eq!(weighted.r, 0.2);
    assert_relative_eq!(weighted.g, 0.2);
    assert_relative_eq!(weighted.b, 1.0);
}
