// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};
use sweep_geom::{Aabb, Pose};
use sweep_math::{Axis, Mat4, Quat, Vec3};

/// Stable handle for a body inside a [`crate::World`].
///
/// Ids are dense insertion indices; bodies are never removed, so an id stays
/// valid for the lifetime of its world.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// Insertion index of the body.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for BodyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Role a body plays in collision checks.
///
/// Moving bodies are swept against stationary ones. Two bodies of the same
/// kind are never tested against each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Swept each tick and bounced on contact or at the boundary.
    Moving,
    /// Obstacle; still integrates its own velocity but is never bounced.
    Stationary,
}

/// A box-shaped rigid body.
///
/// `orientation` holds Euler angles in radians applied as `Rz * Ry * Rx`.
/// `transform` and `aabb` are caches derived from the pose:
/// [`Body::integrate`] keeps `transform` current, while `aabb` only moves
/// on [`Body::refresh_bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    kind: BodyKind,
    position: Vec3,
    orientation: Vec3,
    velocity: Vec3,
    shape: Aabb,
    transform: Mat4,
    aabb: Aabb,
}

impl Body {
    /// Creates a body whose local shape is centred on its origin.
    #[must_use]
    pub fn new(kind: BodyKind, position: Vec3, half_extents: Vec3) -> Self {
        let [hx, hy, hz] = half_extents.to_array();
        Self::with_shape(kind, position, Aabb::from_center_half_extents(Vec3::ZERO, hx, hy, hz))
    }

    /// Creates a body from an arbitrary local-space box.
    #[must_use]
    pub fn with_shape(kind: BodyKind, position: Vec3, shape: Aabb) -> Self {
        let mut body = Self {
            kind,
            position,
            orientation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            shape,
            transform: Mat4::identity(),
            aabb: shape,
        };
        body.refresh_bounds();
        body
    }

    /// Builder: sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: sets the initial Euler orientation (radians).
    pub fn with_orientation(mut self, orientation: Vec3) -> Self {
        self.orientation = orientation;
        self.refresh_bounds();
        self
    }

    /// Collision role.
    #[must_use]
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Returns `true` for [`BodyKind::Moving`].
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.kind == BodyKind::Moving
    }

    /// World-space position of the body origin.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in radians.
    #[must_use]
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Velocity in world units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Replaces the velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Local-space shape.
    #[must_use]
    pub fn shape(&self) -> Aabb {
        self.shape
    }

    /// World-space bounds as of the last [`Body::refresh_bounds`].
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Model matrix `T * R` for the current pose.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Adds `delta` (radians) to the Euler orientation.
    ///
    /// The caches are left stale; call [`Body::refresh_bounds`] afterwards.
    pub fn rotate(&mut self, delta: Vec3) {
        self.orientation += delta;
    }

    /// Recomputes the model matrix and the world AABB from the current pose.
    pub fn refresh_bounds(&mut self) {
        self.refresh_transform();
        self.aabb = self.shape.transformed(&self.transform);
    }

    /// Advances the position by `velocity * dt` and refreshes the model
    /// matrix. The world AABB is not touched.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.refresh_transform();
    }

    /// Negates each velocity component whose position has left
    /// `[-limits, limits]` on that axis.
    ///
    /// Only the velocity changes; the body is not pushed back inside. Returns
    /// which axes flipped, indexed by [`Axis::index`].
    pub fn reflect_within(&mut self, limits: Vec3) -> [bool; 3] {
        let mut flipped = [false; 3];
        for axis in Axis::ALL {
            if self.position.get(axis).abs() > limits.get(axis) {
                self.velocity = self.velocity.with(axis, -self.velocity.get(axis));
                flipped[axis.index()] = true;
            }
        }
        flipped
    }

    fn refresh_transform(&mut self) {
        self.transform =
            Pose::new(self.position, Quat::from_euler(self.orientation)).model_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_cube() -> Body {
        Body::new(BodyKind::Moving, Vec3::ZERO, Vec3::splat(0.1))
    }

    #[test]
    fn integrate_moves_transform_but_not_bounds() {
        let mut body = moving_cube().with_velocity(Vec3::new(1.0, 0.0, 0.0));
        let before = body.aabb();
        body.integrate(0.5);
        assert_eq!(body.position(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(body.transform().translation_part(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(body.aabb(), before);
        body.refresh_bounds();
        assert!((body.aabb().center().x() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reflect_flips_only_escaped_axes() {
        let mut body = Body::new(BodyKind::Moving, Vec3::new(0.95, 0.1, -1.2), Vec3::splat(0.1))
            .with_velocity(Vec3::new(1.0, 2.0, -3.0));
        let flipped = body.reflect_within(Vec3::new(0.9, 0.8, 1.0));
        assert_eq!(flipped, [true, false, true]);
        assert_eq!(body.velocity(), Vec3::new(-1.0, 2.0, 3.0));
        assert_eq!(body.position(), Vec3::new(0.95, 0.1, -1.2));
    }

    #[test]
    fn rotation_is_deferred_until_refresh() {
        let mut body = moving_cube();
        let before = body.aabb();
        body.rotate(Vec3::new(0.0, 0.0, core::f32::consts::FRAC_PI_4));
        assert_eq!(body.aabb(), before);
        body.refresh_bounds();
        assert!(body.aabb().max().x() > before.max().x());
    }
}
