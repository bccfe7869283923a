// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use sweep_math::{Axis, Mat4, Vec3};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32`; the box lives in whatever space produced it (local
///   shape space for a body's shape, world space after [`Aabb::transformed`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(Self::ordered(&min, &max), "invalid AABB: min > max");
        Self { min, max }
    }

    /// Constructs an AABB, returning `None` when `min > max` on any axis.
    #[must_use]
    pub fn try_new(min: Vec3, max: Vec3) -> Option<Self> {
        Self::ordered(&min, &max).then_some(Self { min, max })
    }

    fn ordered(min: &Vec3, max: &Vec3) -> bool {
        Axis::ALL.iter().all(|a| min.get(*a) <= max.get(*a))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    ///
    /// Negative half-extents are taken by magnitude.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz).abs();
        Self {
            min: center.sub(&he),
            max: center.add(&he),
        }
    }

    /// Width of the box along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max.get(axis) - self.min.get(axis)
    }

    /// Half the box size on each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(0.5)
    }

    /// Box centre.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Returns the box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min.add(&offset),
            max: self.max.add(&offset),
        }
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    ///
    /// This is the static, single-instant test; use [`crate::sweep`] to account
    /// for motion across a tick.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|a| {
            !(self.max.get(*a) < other.min.get(*a) || self.min.get(*a) > other.max.get(*a))
        })
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// This evaluates the eight corners under the affine transform and builds a
    /// new axis-aligned box containing them. Under rotation the result is
    /// generally larger than the source box.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        let first = mat.transform_point(&corners[0]);
        let (min, max) = corners[1..].iter().fold((first, first), |(min, max), c| {
            let p = mat.transform_point(c);
            (min.min(&p), max.max(&p))
        });
        Self { min, max }
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Returns `None` if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_inverted_corners() {
        assert!(Aabb::try_new(Vec3::ONE, Vec3::ZERO).is_none());
        assert!(Aabb::try_new(Vec3::ZERO, Vec3::ZERO).is_some());
    }

    #[test]
    fn overlap_is_inclusive_on_faces() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, 0.5, 0.5, 0.5);
        let b = a.translated(Vec3::new(1.0, 0.0, 0.0));
        let c = a.translated(Vec3::new(1.0001, 0.0, 0.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn extents_and_center() {
        let a = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 1.0, 2.5));
        assert_eq!(a.extent(Axis::X), 4.0);
        assert_eq!(a.extent(Axis::Z), 0.5);
        assert_eq!(a.center(), Vec3::new(1.0, 0.5, 2.25));
        assert_eq!(a.half_extents(), Vec3::new(2.0, 0.5, 0.25));
    }

    #[test]
    fn from_points_handles_empty_and_single() {
        assert!(Aabb::from_points(&[]).is_none());
        let p = Vec3::new(1.0, 2.0, 3.0);
        let b = Aabb::from_points(&[p]);
        assert_eq!(b, Some(Aabb::new(p, p)));
    }
}
