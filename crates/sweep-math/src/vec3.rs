// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::EPSILON;

/// One of the three world axes.
///
/// Ordering is `X < Y < Z`; anything that has to pick between axes (such as
/// the swept solver's tie-break) relies on this order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// The X axis (component 0).
    X,
    /// The Y axis (component 1).
    Y,
    /// The Z axis (component 2).
    Z,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis (`X = 0`, `Y = 1`, `Z = 2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lower-case axis name, for labels and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// `f32` vector used for positions, velocities, extents and angles alike.
///
/// Whether a value is a point or a direction only matters when it meets a
/// matrix: see [`crate::Mat4::transform_point`] and
/// [`crate::Mat4::transform_direction`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    ///
    /// Callers must ensure values are finite.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> f32 {
        self.data[axis.index()]
    }

    /// Returns a copy with the component along `axis` replaced by `value`.
    pub fn with(&self, axis: Axis, value: f32) -> Self {
        let mut data = self.data;
        data[axis.index()] = value;
        Self { data }
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    fn zip(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [a, b, c] = self.data;
        let [x, y, z] = other.data;
        Self::new(f(a, x), f(b, y), f(c, z))
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|c| c * scalar)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip(other, f32::min)
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip(other, f32::max)
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(f32::abs)
    }

    /// Dot product, summed X then Y then Z.
    pub fn dot(&self, other: &Self) -> f32 {
        let [a, b, c] = self.data;
        let [x, y, z] = other.data;
        a * x + b * y + c * z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length; no square root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit vector in the same direction; the zero vector when the length
    /// is at most [`EPSILON`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

/// `[x, y, z]` into a vector.
///
/// # Examples
/// ```
/// use sweep_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z] = self.data;
        match f.precision() {
            Some(p) => write!(f, "({x:.p$}, {y:.p$}, {z:.p$})"),
            None => write!(f, "({x}, {y}, {z})"),
        }
    }
}
