// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for the sweep benchmarks.

use sweep_math::{deg_to_rad, Vec3};
use sweep_sim::{Body, BodyKind, World, WorldSettings};

/// A world with `moving` cubes on a line at `x = -0.6` drifting along X and
/// `stationary` cubes spread along Y at the origin plane, inside the demo
/// boundary.
pub fn grid_world(moving: usize, stationary: usize) -> World {
    let mut world = World::new(WorldSettings {
        spin: Vec3::new(deg_to_rad(1.0), deg_to_rad(1.0), 0.0),
        boundary: Some(Vec3::new(0.9, 0.8, 1.0)),
        normal_epsilon: 1e-4,
    });
    let spread = |i: usize, n: usize| {
        if n <= 1 {
            0.0
        } else {
            -0.7 + 1.4 * i as f32 / (n - 1) as f32
        }
    };
    for i in 0..stationary {
        world.insert(Body::new(
            BodyKind::Stationary,
            Vec3::new(0.0, spread(i, stationary), 0.0),
            Vec3::splat(0.05),
        ));
    }
    for i in 0..moving {
        world.insert(
            Body::new(
                BodyKind::Moving,
                Vec3::new(-0.6, spread(i, moving), 0.0),
                Vec3::splat(0.05),
            )
            .with_velocity(Vec3::new(0.8, 0.0, 0.0)),
        );
    }
    world
}
