// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Mat4, Vec3, EPSILON};

/// Rotation quaternion, `w` is the scalar part. Angles are radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quat {
    /// Quaternion from raw components; not normalized.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The no-op rotation.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Components as `[x, y, z, w]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotation of `angle` about `axis`. A degenerate axis gives the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let (s, c) = (angle * 0.5).sin_cos();
        let [x, y, z] = axis.scale(s / len).to_array();
        Self::new(x, y, z, c)
    }

    /// Orientation from Euler angles, `R = Rz · Ry · Rx`.
    ///
    /// Applied to a vector this turns about X first, then Y, then Z. Bodies
    /// keep accumulated angles and rebuild their rotation from them every
    /// tick, so there is no drift from chained products.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use sweep_math::{Quat, Vec3};
    /// let q = Quat::from_euler(Vec3::new(0.0, FRAC_PI_2, 0.0));
    /// let v = q.rotate(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_euler(angles: Vec3) -> Self {
        let rx = Self::from_axis_angle(Vec3::UNIT_X, angles.x());
        let ry = Self::from_axis_angle(Vec3::UNIT_Y, angles.y());
        let rz = Self::from_axis_angle(Vec3::UNIT_Z, angles.z());
        rz.multiply(&ry).multiply(&rx)
    }

    /// Hamilton product `self * rhs`: applies `rhs` first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Unit-length copy; the identity when the norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Rotates a direction.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        self.to_mat4().transform_direction(v)
    }

    /// Rotation matrix (normalizes first).
    pub fn to_mat4(&self) -> Mat4 {
        let Self { x, y, z, w } = self.normalize();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_columns([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0],
            [2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0],
            [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl From<[f32; 4]> for Quat {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}
