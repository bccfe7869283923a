// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use sweep_math::{Mat4, Quat, Vec3};

/// Position and orientation of a rigid body; shapes are never scaled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    position: Vec3,
    rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::identity())
    }
}

impl Pose {
    /// Pose at `position` turned by `rotation`.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// World-space position of the shape's origin.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Model matrix `T * R`: rotate about the local origin, then move.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position.to_array();
        Mat4::translation(x, y, z) * self.rotation.to_mat4()
    }
}
