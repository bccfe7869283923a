// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::aabb::Aabb;
use sweep_math::{Axis, Vec3};

/// Entry time given to a motionless axis whose boxes can never meet.
///
/// Any entry time above `1.0` rules the contact out of the current tick.
pub const DISJOINT_ENTRY: f32 = 2.0;

/// Time reported by [`SweepOutcome::time_or_sentinel`] when nothing is hit.
pub const NO_COLLISION_TIME: f32 = 2.0;

/// Per-axis intermediate values of a sweep.
///
/// Distances are measured from the moving box's leading (entry) or trailing
/// (exit) face to the stationary box's opposite face, signed so that a
/// positive value lies in the direction of travel. Times are those distances
/// divided by the displacement on the axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisSweep {
    /// Gap to close before the boxes start touching on this axis.
    pub entry_distance: f32,
    /// Gap to close before the boxes stop touching on this axis.
    pub exit_distance: f32,
    /// Fraction of the tick at which this axis starts overlapping.
    ///
    /// `-∞` when the axis has no motion and already overlaps,
    /// [`DISJOINT_ENTRY`] when it has no motion and never will.
    pub entry_time: f32,
    /// Fraction of the tick at which this axis stops overlapping (`+∞` with
    /// no motion).
    pub exit_time: f32,
}

/// First contact found by [`sweep`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    time: f32,
    axis: Axis,
    sign: f32,
}

impl Contact {
    /// Fraction of the displacement travelled before contact, in `[0, 1]`.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Axis whose faces met.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Sign of the normal along [`Contact::axis`] (`1.0` or `-1.0`).
    #[must_use]
    pub fn sign(&self) -> f32 {
        self.sign
    }

    /// Contact normal, pointing back along the direction of approach.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        Vec3::ZERO.with(self.axis, self.sign)
    }
}

/// Result of a sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SweepOutcome {
    /// The boxes first touch during this tick.
    Collision(Contact),
    /// No contact begins during this tick.
    NoCollision,
}

impl SweepOutcome {
    /// The contact, if any.
    #[must_use]
    pub fn contact(&self) -> Option<Contact> {
        match self {
            Self::Collision(c) => Some(*c),
            Self::NoCollision => None,
        }
    }

    /// Returns `true` for [`SweepOutcome::Collision`].
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision(_))
    }

    /// Contact time, or [`NO_COLLISION_TIME`] when nothing is hit.
    #[must_use]
    pub fn time_or_sentinel(&self) -> f32 {
        self.contact().map_or(NO_COLLISION_TIME, |c| c.time)
    }

    /// Contact normal, or the zero vector when nothing is hit.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.contact().map_or(Vec3::ZERO, |c| c.normal())
    }
}

fn sweep_axis(moving: &Aabb, stationary: &Aabb, displacement: f32, axis: Axis) -> AxisSweep {
    let (m_min, m_max) = (moving.min().get(axis), moving.max().get(axis));
    let (s_min, s_max) = (stationary.min().get(axis), stationary.max().get(axis));

    let (entry_distance, exit_distance) = if displacement > 0.0 {
        (s_min - m_max, s_max - m_min)
    } else {
        (s_max - m_min, s_min - m_max)
    };

    let (entry_time, exit_time) = if displacement == 0.0 {
        let reach = moving.extent(axis) + stationary.extent(axis);
        let entry = if entry_distance.abs().max(exit_distance.abs()) > reach {
            DISJOINT_ENTRY
        } else {
            f32::NEG_INFINITY
        };
        (entry, f32::INFINITY)
    } else {
        (entry_distance / displacement, exit_distance / displacement)
    };

    AxisSweep {
        entry_distance,
        exit_distance,
        entry_time,
        exit_time,
    }
}

/// Computes the per-axis entry/exit distances and times for a sweep.
///
/// Exposed for diagnostics; [`sweep`] is built on it.
#[must_use]
pub fn sweep_axes(moving: &Aabb, stationary: &Aabb, displacement: Vec3) -> [AxisSweep; 3] {
    Axis::ALL.map(|axis| sweep_axis(moving, stationary, displacement.get(axis), axis))
}

/// Sweeps `moving` by `displacement` against `stationary`.
///
/// The contact interval on each axis is `[entry_time, exit_time]`; the boxes
/// touch when all three intervals overlap, so the time of impact is the
/// latest entry provided it precedes the earliest exit. Contacts that started
/// before the tick (every entry negative) or that start after it (any entry
/// above one) are not reported.
///
/// # Examples
/// ```
/// use sweep_geom::{sweep, Aabb};
/// use sweep_math::{Axis, Vec3};
/// let moving = Aabb::from_center_half_extents(Vec3::ZERO, 0.1, 0.1, 0.1);
/// let wall = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), 0.1, 0.1, 0.1);
/// let hit = sweep(&moving, &wall, Vec3::new(5.0, 0.0, 0.0)).contact().unwrap();
/// assert!((hit.time() - 0.36).abs() < 1e-6);
/// assert_eq!(hit.axis(), Axis::X);
/// assert_eq!(hit.normal(), Vec3::new(-1.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn sweep(moving: &Aabb, stationary: &Aabb, displacement: Vec3) -> SweepOutcome {
    let axes = sweep_axes(moving, stationary, displacement);

    let entry = axes
        .iter()
        .map(|a| a.entry_time)
        .fold(f32::NEG_INFINITY, f32::max);
    let exit = axes
        .iter()
        .map(|a| a.exit_time)
        .fold(f32::INFINITY, f32::min);

    if entry > exit
        || axes.iter().all(|a| a.entry_time < 0.0)
        || axes.iter().any(|a| a.entry_time > 1.0)
    {
        return SweepOutcome::NoCollision;
    }

    // Lowest axis wins a tie for the latest entry.
    let Some((axis, hit)) = Axis::ALL
        .into_iter()
        .zip(axes)
        .find(|(_, a)| a.entry_time == entry)
    else {
        return SweepOutcome::NoCollision;
    };

    // A zero gap means the faces already touch; fall back to the direction
    // of travel so the normal still opposes the approach.
    let sign = if hit.entry_distance < 0.0 {
        1.0
    } else if hit.entry_distance > 0.0 || displacement.get(axis) > 0.0 {
        -1.0
    } else {
        1.0
    };
    SweepOutcome::Collision(Contact {
        time: entry,
        axis,
        sign,
    })
}
