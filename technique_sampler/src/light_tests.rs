//! Unit tests for DirectionalLight

use super::*;

#[test]
fn test_light_defaults() {
    let light = DirectionalLight::default();
    let params = light.params();
    assert_eq!(params.direction, Vec3::X);
    assert_eq!(params.diffuse, Vec3::ONE);
    assert_eq!(params.ambient, Vec3::splat(0.3));
    assert_eq!(params.specular, Vec3::ZERO);
}

#[test]
fn test_light_quarter_turn_after_two_seconds() {
    let mut light = DirectionalLight::default();
    light.update(1.0);
    light.update(1.0);
    // +X rotated 90° about Y points to -Z
    assert!(light.direction().abs_diff_eq(Vec3::NEG_Z, 1e-5));
}

#[test]
fn test_light_stays_unit_length() {
    let mut light = DirectionalLight::default();
    for _ in 0..10_000 {
        light.update(1.0 / 60.0);
    }
    assert!((light.direction().length() - 1.0).abs() < 1e-5);
    assert!(light.direction().y.abs() < 1e-5);
}

#[test]
fn test_light_zero_direction_falls_back() {
    let light = DirectionalLight::new(Vec3::ZERO, 1.0);
    assert_eq!(light.direction(), Vec3::X);
}

#[test]
fn test_light_zero_elapsed_is_noop() {
    let mut light = DirectionalLight::new(Vec3::new(1.0, 0.0, 1.0), 1.0);
    let before = light.direction();
    light.update(0.0);
    assert!(light.direction().abs_diff_eq(before, 1e-6));
}
