// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for the swept AABB solver.

use proptest::prelude::*;
use sweep_geom::{sweep, Aabb, SweepOutcome};
use sweep_math::{Axis, Vec3};

fn cube(center: Vec3, half: f32) -> Aabb {
    Aabb::from_center_half_extents(center, half, half, half)
}

#[test]
fn fast_box_does_not_tunnel_through_small_box() {
    let moving = cube(Vec3::ZERO, 0.1);
    let stationary = cube(Vec3::new(2.0, 0.0, 0.0), 0.1);
    // Displacement is 25x the box width; a discrete end-of-tick test misses it.
    let displacement = Vec3::new(5.0, 0.0, 0.0);
    assert!(!moving.translated(displacement).overlaps(&stationary));

    let hit = sweep(&moving, &stationary, displacement)
        .contact()
        .expect("fast box must still collide");
    let expected = (2.0 - 0.2) / 5.0;
    assert!((hit.time() - expected).abs() < 1e-5, "time {}", hit.time());
    assert_eq!(hit.normal(), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn touching_boxes_approaching_collide_at_time_zero() {
    let moving = cube(Vec3::ZERO, 0.5);
    let stationary = cube(Vec3::new(0.0, 0.0, -1.0), 0.5);
    let hit = sweep(&moving, &stationary, Vec3::new(0.0, 0.0, -0.25))
        .contact()
        .expect("face contact");
    assert_eq!(hit.time(), 0.0);
    assert_eq!(hit.axis(), Axis::Z);
    assert_eq!(hit.normal(), Vec3::UNIT_Z);
}

#[test]
fn separating_boxes_report_no_collision() {
    let moving = cube(Vec3::ZERO, 0.5);
    let stationary = cube(Vec3::new(3.0, 0.0, 0.0), 0.5);
    let outcome = sweep(&moving, &stationary, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(outcome, SweepOutcome::NoCollision);
    assert_eq!(outcome.normal(), Vec3::ZERO);
}

#[test]
fn contact_exactly_at_end_of_tick_is_reported() {
    let moving = cube(Vec3::ZERO, 0.5);
    let stationary = cube(Vec3::new(0.0, 2.0, 0.0), 0.5);
    let hit = sweep(&moving, &stationary, Vec3::new(0.0, 1.0, 0.0))
        .contact()
        .expect("contact at t = 1");
    assert_eq!(hit.time(), 1.0);
    assert_eq!(hit.normal(), Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn contact_beyond_tick_is_deferred() {
    let moving = cube(Vec3::ZERO, 0.5);
    let stationary = cube(Vec3::new(0.0, 2.0, 0.0), 0.5);
    let outcome = sweep(&moving, &stationary, Vec3::new(0.0, 0.5, 0.0));
    assert!(!outcome.is_collision());
}

#[test]
fn passing_beside_a_box_is_not_a_contact() {
    // Moves along X but is offset on Y by more than both boxes combined.
    let moving = cube(Vec3::new(0.0, 3.0, 0.0), 0.5);
    let stationary = cube(Vec3::new(2.0, 0.0, 0.0), 0.5);
    assert!(!sweep(&moving, &stationary, Vec3::new(4.0, 0.0, 0.0)).is_collision());
}

#[test]
fn oblique_approach_picks_last_axis_to_enter() {
    // X closes its gap at t = 0.25, Y at t = 0.5: Y is the contact axis.
    let moving = cube(Vec3::ZERO, 0.5);
    let stationary = cube(Vec3::new(1.5, 2.0, 0.0), 0.5);
    let hit = sweep(&moving, &stationary, Vec3::new(2.0, 2.0, 0.0))
        .contact()
        .expect("oblique hit");
    assert_eq!(hit.axis(), Axis::Y);
    assert_eq!(hit.time(), 0.5);
    assert_eq!(hit.normal(), Vec3::new(0.0, -1.0, 0.0));
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (
        -5.0f32..5.0,
        -5.0f32..5.0,
        -5.0f32..5.0,
        0.01f32..1.0,
        0.01f32..1.0,
        0.01f32..1.0,
    )
        .prop_map(|(x, y, z, hx, hy, hz)| {
            Aabb::from_center_half_extents(Vec3::new(x, y, z), hx, hy, hz)
        })
}

fn arb_displacement() -> impl Strategy<Value = Vec3> {
    let component = prop_oneof![Just(0.0f32), -8.0f32..8.0];
    (component.clone(), component.clone(), component)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn collisions_are_in_range_with_a_single_unit_normal(
        moving in arb_box(),
        stationary in arb_box(),
        displacement in arb_displacement(),
    ) {
        if let SweepOutcome::Collision(hit) = sweep(&moving, &stationary, displacement) {
            prop_assert!((0.0..=1.0).contains(&hit.time()));
            let n = hit.normal().to_array();
            let units = n.iter().filter(|c| c.abs() == 1.0).count();
            let zeros = n.iter().filter(|c| **c == 0.0).count();
            prop_assert_eq!((units, zeros), (1, 2));
        }
    }

    #[test]
    fn zero_displacement_never_collides(moving in arb_box(), stationary in arb_box()) {
        prop_assert_eq!(sweep(&moving, &stationary, Vec3::ZERO), SweepOutcome::NoCollision);
    }

    #[test]
    fn moving_away_along_separating_axis_never_collides(
        gap in 0.001f32..3.0,
        half in 0.05f32..1.0,
        speed in 0.001f32..10.0,
        lateral in -0.04f32..0.04,
    ) {
        let moving = cube(Vec3::new(0.0, lateral, 0.0), half);
        let stationary = cube(Vec3::new(2.0 * half + gap, 0.0, 0.0), half);
        let outcome = sweep(&moving, &stationary, Vec3::new(-speed, 0.0, 0.0));
        prop_assert_eq!(outcome, SweepOutcome::NoCollision);
        prop_assert_eq!(outcome.normal(), Vec3::ZERO);
    }

    #[test]
    fn normal_opposes_approach_direction(
        gap in 0.01f32..2.0,
        speed_scale in 1.01f32..4.0,
        negative in any::<bool>(),
    ) {
        let moving = cube(Vec3::ZERO, 0.25);
        let offset = 0.5 + gap;
        let (center, dir) = if negative { (-offset, -1.0) } else { (offset, 1.0) };
        let stationary = cube(Vec3::new(0.0, 0.0, center), 0.25);
        let displacement = Vec3::new(0.0, 0.0, dir * gap * speed_scale);
        let hit = sweep(&moving, &stationary, displacement).contact();
        prop_assert!(hit.is_some());
        let hit = hit.unwrap();
        prop_assert_eq!(hit.axis(), Axis::Z);
        prop_assert_eq!(hit.sign(), -dir);
    }
}
