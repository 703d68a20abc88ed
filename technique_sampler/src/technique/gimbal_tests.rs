use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};
use crate::math::{rotation_x, rotation_y, rotation_z};
use super::*;

fn held(positive: bool, negative: bool) -> AxisInput {
    AxisInput::new(positive, negative)
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_zero_angles_yield_calibration_exactly() {
    let gimbal = OrientationGimbal::default();
    let t = gimbal.transforms();

    assert_eq!(t.body, gimbal.calibration());
    assert_eq!(t.ring_x, Mat4::IDENTITY);
    assert_eq!(t.ring_y, Mat4::IDENTITY);
    assert_eq!(t.ring_z, Mat4::IDENTITY);
}

#[test]
fn test_calibration_is_270_degrees_about_y() {
    let gimbal = OrientationGimbal::default();
    assert!(gimbal.calibration().abs_diff_eq(rotation_y(270f32.to_radians()), 1e-6));
    // +X model axis ends up on +Z
    let x = gimbal.calibration().transform_vector3(Vec3::X);
    assert!(x.abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn test_rot_x_90_scenario() {
    let mut gimbal = OrientationGimbal::default();
    gimbal.set_angles(FRAC_PI_2, 0.0, 0.0);
    let t = gimbal.transforms();

    assert_eq!(t.ring_x, rotation_x(FRAC_PI_2));
    assert_eq!(t.body, gimbal.calibration() * rotation_x(FRAC_PI_2));
    assert_eq!(t.ring_y, Mat4::IDENTITY);
}

#[test]
fn test_hierarchical_composition_order() {
    let mut gimbal = OrientationGimbal::default();
    gimbal.set_angles(0.4, -1.1, 2.3);
    let t = gimbal.transforms();

    let (rx, ry, rz) = (rotation_x(0.4), rotation_y(-1.1), rotation_z(2.3));
    assert!(t.ring_y.abs_diff_eq(ry, 1e-6));
    assert!(t.ring_x.abs_diff_eq(rx * ry, 1e-6));
    assert!(t.ring_z.abs_diff_eq(rz * rx * ry, 1e-6));
    assert!(t.body.abs_diff_eq(gimbal.calibration() * rz * rx * ry, 1e-6));

    // Any other order gives a different orientation
    assert!(!t.ring_z.abs_diff_eq(ry * rx * rz, 1e-3));
}

#[test]
fn test_ring_y_applied_first() {
    // Y ring turns X onto -Z; the X ring then rotates that about X
    let mut gimbal = OrientationGimbal::default();
    gimbal.set_angles(FRAC_PI_2, FRAC_PI_2, 0.0);
    let v = gimbal.transforms().ring_x.transform_vector3(Vec3::X);
    assert!(v.abs_diff_eq(Vec3::Y, 1e-6));
}

#[test]
fn test_no_translation() {
    let mut gimbal = OrientationGimbal::default();
    gimbal.set_angles(1.0, 2.0, 3.0);
    let t = gimbal.transforms();
    for m in [t.body, t.ring_x, t.ring_y, t.ring_z] {
        assert_eq!(m.w_axis.truncate(), Vec3::ZERO);
    }
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_rotates_90_degrees_per_second() {
    let mut gimbal = OrientationGimbal::default();
    let input = GimbalInput { x: held(true, false), ..Default::default() };

    gimbal.update(input, 0.5);
    gimbal.update(input, 0.5);

    let (x, y, z) = gimbal.angles();
    assert!((x - FRAC_PI_2).abs() < 1e-6);
    assert_eq!(y, 0.0);
    assert_eq!(z, 0.0);
}

#[test]
fn test_axes_are_independent_and_signed() {
    let mut gimbal = OrientationGimbal::default();
    let input = GimbalInput {
        x: held(false, true),
        y: held(true, false),
        z: held(false, false),
    };
    gimbal.update(input, 1.0);

    let (x, y, z) = gimbal.angles();
    assert!((x + FRAC_PI_2).abs() < 1e-6);
    assert!((y - FRAC_PI_2).abs() < 1e-6);
    assert_eq!(z, 0.0);
}

#[test]
fn test_opposite_inputs_cancel() {
    let mut gimbal = OrientationGimbal::default();
    let input = GimbalInput { z: held(true, true), ..Default::default() };
    gimbal.update(input, 1.0);
    assert_eq!(gimbal.angles(), (0.0, 0.0, 0.0));
}

#[test]
fn test_angles_grow_unbounded() {
    let mut gimbal = OrientationGimbal::default();
    let input = GimbalInput { y: held(true, false), ..Default::default() };
    for _ in 0..10 {
        gimbal.update(input, 1.0);
    }
    let (_, y, _) = gimbal.angles();
    assert!((y - 5.0 * PI).abs() < 1e-4);
}

#[test]
fn test_transforms_are_idempotent() {
    let mut gimbal = OrientationGimbal::default();
    gimbal.set_angles(0.123, 4.56, -7.89);
    let a = gimbal.transforms();
    let b = gimbal.transforms();
    assert_eq!(a, b);
}
