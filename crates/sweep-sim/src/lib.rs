// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sweep-sim: fixed-timestep simulation around the swept AABB solver.
//!
//! A [`Simulation`] owns a [`World`] of bodies and a [`FixedStep`]
//! accumulator. Each rendered frame reads the clock once, runs zero or more
//! fixed-size ticks back-to-back, then hands one model matrix per body to a
//! [`PresentPort`]. Every tick recomputes the bodies' AABBs, sweeps each
//! moving body against each stationary body, and splits the tick at the
//! earliest contact so that fast bodies bounce instead of tunneling.
//!
//! Everything runs on the caller's thread; there are no globals.
#![forbid(unsafe_code)]

mod body;
mod clock;
mod config;
mod error;
mod fps;
mod ports;
mod scheduler;
mod simulation;
mod world;

pub use body::{Body, BodyId, BodyKind};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    BodySpec, SimConfig, DEFAULT_BOUNDARY, DEFAULT_FPS_WINDOW, DEFAULT_MAX_FRAME_DELTA,
    DEFAULT_NORMAL_EPSILON, DEFAULT_PHYSICS_STEP, DEFAULT_SPIN_DEGREES,
};
pub use error::SimError;
pub use fps::{FpsCounter, FpsSample};
pub use ports::{NullPort, PresentPort};
pub use scheduler::{Advance, FixedStep};
pub use simulation::{FrameReport, Simulation};
pub use world::{
    reflect_velocity, BoundaryReflection, ContactEvent, FrameTransforms, StepReport, World,
    WorldSettings,
};
