// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sweep-math: deterministic float32 linear algebra for the swept AABB core.
//!
//! Covers the pieces the physics step needs and nothing more: 3D vectors,
//! unit quaternions for accumulated orientation, and column-major 4×4
//! matrices for model transforms.
//!
//! All operations round to `f32`; no fused multiply-add is used so results
//! stay identical across targets.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod mat4;
mod quat;
mod vec3;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec3::{Axis, Vec3};

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_round_trip_is_stable_for_whole_degrees() {
        for deg in [0.0_f32, 1.0, 45.0, 90.0, 180.0, 359.0] {
            let back = rad_to_deg(deg_to_rad(deg));
            assert!((back - deg).abs() < 1e-4, "{deg} -> {back}");
        }
    }
}
