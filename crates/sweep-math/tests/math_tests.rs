// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use proptest::prelude::*;
use sweep_math::{deg_to_rad, Axis, Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn vec3_operators_match_methods() {
    let a = Vec3::new(1.0, -2.0, 3.5);
    let b = Vec3::new(0.5, 4.0, -1.0);
    assert_eq!(a + b, a.add(&b));
    assert_eq!(a - b, a.sub(&b));
    assert_eq!(a * 2.0, a.scale(2.0));
    assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.5));
    let mut c = a;
    c += b;
    assert_eq!(c, Vec3::new(1.5, 2.0, 2.5));
}

#[test]
fn axis_accessors_round_trip() {
    let v = Vec3::new(7.0, 8.0, 9.0);
    for axis in Axis::ALL {
        let replaced = v.with(axis, -1.0);
        assert_eq!(replaced.get(axis), -1.0);
        for other in Axis::ALL.into_iter().filter(|a| *a != axis) {
            assert_eq!(replaced.get(other), v.get(other));
        }
    }
    assert_eq!(Axis::Z.index(), 2);
    assert!(Axis::X < Axis::Y && Axis::Y < Axis::Z);
}

#[test]
fn component_min_max_abs() {
    let a = Vec3::new(-1.0, 5.0, 0.0);
    let b = Vec3::new(2.0, -3.0, 0.0);
    assert_eq!(a.min(&b), Vec3::new(-1.0, -3.0, 0.0));
    assert_eq!(a.max(&b), Vec3::new(2.0, 5.0, 0.0));
    assert_eq!(b.abs(), Vec3::new(2.0, 3.0, 0.0));
}

#[test]
fn euler_single_axis_matches_matrix_rotation() {
    let angle = FRAC_PI_4;
    let qx = Quat::from_euler(Vec3::new(angle, 0.0, 0.0)).to_mat4();
    let qy = Quat::from_euler(Vec3::new(0.0, angle, 0.0)).to_mat4();
    let qz = Quat::from_euler(Vec3::new(0.0, 0.0, angle)).to_mat4();
    approx_eq16(qx.to_array(), Mat4::rotation_x(angle).to_array());
    approx_eq16(qy.to_array(), Mat4::rotation_y(angle).to_array());
    approx_eq16(qz.to_array(), Mat4::rotation_z(angle).to_array());
}

#[test]
fn euler_composition_is_z_after_y_after_x() {
    let angles = Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0);
    let q = Quat::from_euler(angles);
    // X first: +Y -> +Z; then Y: +Z -> +X.
    approx_eq3(q.rotate(&Vec3::UNIT_Y), Vec3::UNIT_X);
    let expected = Mat4::rotation_y(FRAC_PI_2).multiply(&Mat4::rotation_x(FRAC_PI_2));
    approx_eq16(q.to_mat4().to_array(), expected.to_array());
}

#[test]
fn translation_part_reads_last_column() {
    let m = Mat4::translation(1.0, -2.0, 3.0).multiply(&Mat4::rotation_z(deg_to_rad(30.0)));
    assert_eq!(m.translation_part(), Vec3::new(1.0, -2.0, 3.0));
    let mut n = Mat4::identity();
    n *= Mat4::translation(4.0, 5.0, 6.0);
    assert_eq!(n.translation_part(), Vec3::new(4.0, 5.0, 6.0));
}

proptest! {
    #[test]
    fn normalize_yields_unit_or_zero(x in -1.0e3f32..1.0e3, y in -1.0e3f32..1.0e3, z in -1.0e3f32..1.0e3) {
        let v = Vec3::new(x, y, z);
        let n = v.normalize();
        if v.length() <= sweep_math::EPSILON {
            prop_assert_eq!(n, Vec3::ZERO);
        } else {
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn rotation_preserves_length(ax in -3.2f32..3.2, ay in -3.2f32..3.2, az in -3.2f32..3.2) {
        let q = Quat::from_euler(Vec3::new(ax, ay, az));
        let v = Vec3::new(0.3, -0.7, 1.1);
        prop_assert!((q.rotate(&v).length() - v.length()).abs() < 1e-4);
    }
}
