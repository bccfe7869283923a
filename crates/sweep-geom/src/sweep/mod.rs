// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Swept AABB collision for one moving box against one stationary box.
//!
//! Contract:
//! - Inputs are the two world-space boxes at the start of a tick and the
//!   moving box's displacement over that tick (velocity × `dt`).
//! - The result is either a [`Contact`] with a time of impact in `[0, 1]`
//!   (a fraction of the displacement) and a unit normal on exactly one axis,
//!   or [`SweepOutcome::NoCollision`].
//! - Boxes that already overlap and keep moving report no collision; the
//!   solver only reports contacts that begin within the tick.
//!
//! Ties between axes for the latest entry time resolve to the lowest axis
//! (`X`, then `Y`, then `Z`).

mod solver;

pub use solver::{
    sweep, sweep_axes, AxisSweep, Contact, SweepOutcome, DISJOINT_ENTRY, NO_COLLISION_TIME,
};
