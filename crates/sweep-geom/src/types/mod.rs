// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the simulation (pose, AABB).
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on faces.
//! - Affine math uses `f32` without fused multiply-add to preserve identical
//!   results across platforms.
//! - World AABBs are recomputed from the local shape every tick, never
//!   patched incrementally.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Rigid body poses and their model matrices."]
pub mod pose;
