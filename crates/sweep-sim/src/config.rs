// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serializable simulation parameters.
//!
//! [`SimConfig::default`] is the two-cube demo scene: a cube drifting along
//! X towards a spinning obstacle at the origin, inside a reflecting box.

use serde::{Deserialize, Serialize};
use sweep_math::{deg_to_rad, Vec3};

use crate::body::{Body, BodyKind};
use crate::error::SimError;
use crate::fps::FpsCounter;
use crate::scheduler::FixedStep;
use crate::simulation::Simulation;
use crate::world::{World, WorldSettings};

/// Default fixed physics step in seconds.
pub const DEFAULT_PHYSICS_STEP: f64 = 0.012;
/// Default per-frame clamp in seconds.
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.25;
/// Default FPS sampling window in seconds.
pub const DEFAULT_FPS_WINDOW: f64 = 1.0;
/// Default half-size of the reflecting box.
pub const DEFAULT_BOUNDARY: [f32; 3] = [0.9, 0.8, 1.0];
/// Default per-tick spin in degrees.
pub const DEFAULT_SPIN_DEGREES: [f32; 3] = [1.0, 1.0, 0.0];
/// Default threshold below which normal components are ignored.
pub const DEFAULT_NORMAL_EPSILON: f32 = 1e-4;

/// One body in a [`SimConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Collision role.
    pub kind: BodyKind,
    /// Initial world position.
    pub position: [f32; 3],
    /// Half-size of the local box.
    pub half_extents: [f32; 3],
    /// Initial velocity in units per second.
    #[serde(default)]
    pub velocity: [f32; 3],
    /// Initial Euler orientation in degrees.
    #[serde(default)]
    pub orientation_degrees: [f32; 3],
}

impl BodySpec {
    fn validate(&self, index: usize) -> Result<(), SimError> {
        let fail = |reason| Err(SimError::InvalidBody { index, reason });
        if !Vec3::from(self.position).is_finite() {
            return fail("position must be finite");
        }
        if !Vec3::from(self.velocity).is_finite() {
            return fail("velocity must be finite");
        }
        if !Vec3::from(self.orientation_degrees).is_finite() {
            return fail("orientation must be finite");
        }
        if !self.half_extents.iter().all(|h| h.is_finite() && *h > 0.0) {
            return fail("half-extents must be finite and > 0");
        }
        Ok(())
    }

    /// Instantiates the body.
    #[must_use]
    pub fn to_body(&self) -> Body {
        let orientation = Vec3::from(self.orientation_degrees.map(deg_to_rad));
        Body::new(self.kind, self.position.into(), self.half_extents.into())
            .with_velocity(self.velocity.into())
            .with_orientation(orientation)
    }
}

/// Everything needed to build a [`Simulation`].
///
/// Missing fields deserialize to their defaults, so a partial JSON document
/// only overrides what it names. `boundary: null` disables the reflecting box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed physics step in seconds.
    pub physics_step: f64,
    /// Frame-time clamp in seconds.
    pub max_frame_delta: f64,
    /// FPS sampling window in seconds.
    pub fps_window: f64,
    /// Half-size of the reflecting box, or `None` for no boundary.
    pub boundary: Option<[f32; 3]>,
    /// Euler spin added to every body per tick, in degrees.
    pub spin_degrees: [f32; 3],
    /// Normal components at or below this magnitude are not reflected.
    pub normal_epsilon: f32,
    /// Bodies, in id order.
    pub bodies: Vec<BodySpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            physics_step: DEFAULT_PHYSICS_STEP,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            fps_window: DEFAULT_FPS_WINDOW,
            boundary: Some(DEFAULT_BOUNDARY),
            spin_degrees: DEFAULT_SPIN_DEGREES,
            normal_epsilon: DEFAULT_NORMAL_EPSILON,
            bodies: vec![
                BodySpec {
                    kind: BodyKind::Stationary,
                    position: [0.0, 0.0, 0.0],
                    half_extents: [0.1, 0.1, 0.1],
                    velocity: [0.0; 3],
                    orientation_degrees: [0.0; 3],
                },
                BodySpec {
                    kind: BodyKind::Moving,
                    position: [-0.6, 0.0, 0.0],
                    half_extents: [0.1, 0.1, 0.1],
                    velocity: [0.8, 0.0, 0.0],
                    orientation_degrees: [0.0; 3],
                },
            ],
        }
    }
}

impl SimConfig {
    /// Checks every field; the first problem found is returned.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.physics_step.is_finite() || self.physics_step <= 0.0 {
            return Err(SimError::InvalidStep(self.physics_step));
        }
        if !self.max_frame_delta.is_finite() {
            return Err(SimError::InvalidClamp(self.max_frame_delta));
        }
        if self.max_frame_delta < self.physics_step {
            return Err(SimError::ClampBelowStep {
                max: self.max_frame_delta,
                step: self.physics_step,
            });
        }
        if !self.fps_window.is_finite() || self.fps_window <= 0.0 {
            return Err(SimError::InvalidFpsWindow(self.fps_window));
        }
        if !self.normal_epsilon.is_finite() || self.normal_epsilon < 0.0 {
            return Err(SimError::InvalidEpsilon(self.normal_epsilon));
        }
        if let Some(b) = self.boundary {
            if !b.iter().all(|h| h.is_finite() && *h > 0.0) {
                return Err(SimError::InvalidBoundary(b));
            }
        }
        if !Vec3::from(self.spin_degrees).is_finite() {
            return Err(SimError::InvalidSpin(self.spin_degrees));
        }
        self.bodies
            .iter()
            .enumerate()
            .try_for_each(|(i, b)| b.validate(i))
    }

    /// World settings with angles converted to radians.
    #[must_use]
    pub fn world_settings(&self) -> WorldSettings {
        WorldSettings {
            spin: Vec3::from(self.spin_degrees.map(deg_to_rad)),
            boundary: self.boundary.map(Vec3::from),
            normal_epsilon: self.normal_epsilon,
        }
    }

    /// Validates and builds the world.
    pub fn build_world(&self) -> Result<World, SimError> {
        self.validate()?;
        let mut world = World::new(self.world_settings());
        for spec in &self.bodies {
            world.insert(spec.to_body());
        }
        Ok(world)
    }

    /// Validates and builds a simulation whose clocks start at `start`.
    pub fn build(&self, start: f64) -> Result<Simulation, SimError> {
        let world = self.build_world()?;
        let scheduler = FixedStep::new(self.physics_step, self.max_frame_delta, start)?;
        let fps = FpsCounter::new(self.fps_window, start);
        Ok(Simulation::new(world, scheduler, fps))
    }
}
