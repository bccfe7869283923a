// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for swept collision.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`).
- Rigid poses (`Pose`).
- Discrete simulation ticks (`Tick`).
- The swept AABB solver (`sweep`), which reports when, and along which axis,
  a moving box first touches a stationary one within a single tick.

Design notes:
- Deterministic: pure functions over `f32`, no ambient state.
- Overlap is inclusive on faces; the swept solver reports face contact at
  `time = 0` when the boxes approach.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Swept (continuous) collision between a moving and a stationary box.
pub mod sweep;
/// Tick-based time types.
pub mod temporal;
/// Foundational geometric types.
pub mod types;

pub use sweep::{sweep, sweep_axes, AxisSweep, Contact, SweepOutcome};
pub use temporal::tick::Tick;
pub use types::aabb::Aabb;
pub use types::pose::Pose;
