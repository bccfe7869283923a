// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Column-major 4×4 affine matrix.
///
/// This is the model matrix format handed to presentation ports. Points are
/// treated as `w = 1`, directions as `w = 0`; there is no perspective divide.
///
/// # Examples
/// ```
/// use sweep_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    /// Matrix from four columns.
    pub const fn from_columns(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Matrix from 16 values in column-major order.
    pub const fn new(d: [f32; 16]) -> Self {
        Self::from_columns([
            [d[0], d[1], d[2], d[3]],
            [d[4], d[5], d[6], d[7]],
            [d[8], d[9], d[10], d[11]],
            [d[12], d[13], d[14], d[15]],
        ])
    }

    /// Translation by `(tx, ty, tz)`.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    /// Non-uniform scale.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_columns([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about +X.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about +Y.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_columns([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about +Z.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_columns([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// The 16 values in column-major order.
    pub fn to_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (c, col) in self.cols.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// `self * rhs`; applied to a point, `rhs` acts first.
    ///
    /// Sums run in a fixed order with plain multiplies and adds.
    ///
    /// ```
    /// use sweep_math::Mat4;
    /// let s = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(Mat4::identity().multiply(&s), s);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (c, out) in cols.iter_mut().enumerate() {
            for (r, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).fold(0.0, |acc, k| acc + self.cols[k][r] * rhs.cols[c][k]);
            }
        }
        Self { cols }
    }

    fn apply(&self, v: &Vec3, w: f32) -> Vec3 {
        let [x, y, z] = v.to_array();
        let row = |r: usize| {
            self.cols[0][r] * x + self.cols[1][r] * y + self.cols[2][r] * z + self.cols[3][r] * w
        };
        Vec3::new(row(0), row(1), row(2))
    }

    /// Transforms a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.apply(point, 1.0)
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.apply(direction, 0.0)
    }

    /// Translation column.
    pub fn translation_part(&self) -> Vec3 {
        let [x, y, z, _] = self.cols[3];
        Vec3::new(x, y, z)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
