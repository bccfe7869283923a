// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use sweep_geom::{sweep, Contact, Tick};
use sweep_math::{Axis, Mat4, Vec3};
use tracing::{debug, trace};

use crate::body::{Body, BodyId};
use crate::error::SimError;

/// Per-tick behaviour of a [`World`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSettings {
    /// Euler rotation (radians) added to every body each tick.
    pub spin: Vec3,
    /// Half-size of the reflecting box around the origin; `None` disables it.
    pub boundary: Option<Vec3>,
    /// Normal components with magnitude at or below this are not reflected.
    pub normal_epsilon: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            spin: Vec3::ZERO,
            boundary: None,
            normal_epsilon: 1e-4,
        }
    }
}

/// A moving body's first contact within a tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContactEvent {
    /// Tick during which the contact happened.
    pub tick: Tick,
    /// Body that was swept.
    pub moving: BodyId,
    /// Body it hit.
    pub stationary: BodyId,
    /// Time of impact and normal.
    pub contact: Contact,
    /// Moving body's velocity entering the tick.
    pub velocity_before: Vec3,
    /// Velocity after reflection about the contact normal.
    pub velocity_after: Vec3,
}

/// Velocity flips applied by the boundary check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundaryReflection {
    /// Body whose velocity changed.
    pub body: BodyId,
    /// Flipped axes, indexed by [`Axis::index`].
    pub axes: [bool; 3],
}

impl BoundaryReflection {
    /// Iterates the flipped axes in X, Y, Z order.
    pub fn flipped(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|a| self.axes[a.index()])
    }
}

/// What happened during one [`World::step`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepReport {
    /// At most one contact per moving body, in body order.
    pub contacts: Vec<ContactEvent>,
    /// Boundary reflections, in body order.
    pub reflections: Vec<BoundaryReflection>,
}

/// Model matrices for one presented frame, in body order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameTransforms {
    entries: Vec<(BodyId, Mat4)>,
}

impl FrameTransforms {
    /// Number of bodies in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the world had no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matrix for `id`, if the body exists.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&Mat4> {
        self.entries.get(id.index()).map(|(_, m)| m)
    }

    /// Iterates `(id, matrix)` pairs in body order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Mat4)> + '_ {
        self.entries.iter().map(|(id, m)| (*id, m))
    }
}

/// Negates each component of `velocity` whose matching `normal` component
/// exceeds `epsilon` in magnitude.
///
/// With an axis-aligned unit normal this flips exactly one component and
/// preserves speed.
#[must_use]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3, epsilon: f32) -> Vec3 {
    Axis::ALL.into_iter().fold(velocity, |v, axis| {
        if normal.get(axis).abs() > epsilon {
            v.with(axis, -v.get(axis))
        } else {
            v
        }
    })
}

/// The set of bodies plus the rules that advance them.
#[derive(Debug, Clone, Default)]
pub struct World {
    bodies: Vec<Body>,
    settings: WorldSettings,
    tick: Tick,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            bodies: Vec::new(),
            settings,
            tick: Tick::ZERO,
        }
    }

    /// Adds a body and returns its id.
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Body by id.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Mutable body by id.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    /// Looks up a body by raw index.
    pub fn resolve(&self, index: usize) -> Result<BodyId, SimError> {
        if index < self.bodies.len() {
            Ok(BodyId(index))
        } else {
            Err(SimError::UnknownBody(index))
        }
    }

    /// Overrides the velocity of body `id`.
    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec3) -> Result<(), SimError> {
        let body = self
            .bodies
            .get_mut(id.index())
            .ok_or(SimError::UnknownBody(id.index()))?;
        body.set_velocity(velocity);
        Ok(())
    }

    /// Iterates bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` when the world holds no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Settings in effect.
    #[must_use]
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// Number of ticks stepped so far.
    #[must_use]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Total kinetic measure `Σ |v|²` over moving bodies.
    ///
    /// Reflection preserves it; useful as a cheap sanity check.
    #[must_use]
    pub fn speed_squared_sum(&self) -> f32 {
        self.bodies
            .iter()
            .filter(|b| b.is_moving())
            .map(|b| b.velocity().length_squared())
            .sum()
    }

    /// Snapshot of every body's model matrix.
    #[must_use]
    pub fn transforms(&self) -> FrameTransforms {
        FrameTransforms {
            entries: self.bodies().map(|(id, b)| (id, b.transform())).collect(),
        }
    }

    /// Advances the world by one tick of `dt` seconds.
    ///
    /// Order within a tick:
    /// 1. every body turns by the configured spin and its bounds refresh;
    /// 2. moving bodies outside the boundary have the offending velocity
    ///    components negated;
    /// 3. each moving body is swept by `velocity * dt` against every
    ///    stationary body and keeps its own earliest contact (ties go to the
    ///    lowest stationary id);
    /// 4. a moving body with a contact at time `t` moves for `t * dt`, has
    ///    its velocity reflected about the normal, then moves for the
    ///    remaining `(1 - t) * dt`; every other body moves for `dt`.
    ///
    /// Bounds are refreshed only in phase 1, so every sweep sees the boxes at
    /// their start-of-tick positions. Moving bodies are not swept against
    /// each other.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let tick = self.tick;
        let spin = self.settings.spin;
        for body in &mut self.bodies {
            body.rotate(spin);
            body.refresh_bounds();
        }

        let mut report = StepReport::default();
        if let Some(limits) = self.settings.boundary {
            for (index, body) in self.bodies.iter_mut().enumerate() {
                if !body.is_moving() {
                    continue;
                }
                let axes = body.reflect_within(limits);
                if axes.contains(&true) {
                    trace!(%tick, body = index, ?axes, "boundary reflect");
                    report.reflections.push(BoundaryReflection {
                        body: BodyId(index),
                        axes,
                    });
                }
            }
        }

        let epsilon = self.settings.normal_epsilon;
        for index in 0..self.bodies.len() {
            let moving = BodyId(index);
            let Some((stationary, contact)) = self.earliest_contact(moving, dt) else {
                self.bodies[index].integrate(dt);
                continue;
            };
            let t = contact.time();
            let body = &mut self.bodies[index];
            let before = body.velocity();
            let after = reflect_velocity(before, contact.normal(), epsilon);
            body.integrate(t * dt);
            body.set_velocity(after);
            body.integrate((1.0 - t) * dt);
            debug!(
                %tick,
                moving = index,
                stationary = stationary.index(),
                time = t,
                axis = contact.axis().name(),
                sign = contact.sign(),
                "contact"
            );
            report.contacts.push(ContactEvent {
                tick,
                moving,
                stationary,
                contact,
                velocity_before: before,
                velocity_after: after,
            });
        }

        self.tick = self.tick.next();
        report
    }

    /// Earliest hit of moving body `id` against the stationary bodies.
    fn earliest_contact(&self, id: BodyId, dt: f32) -> Option<(BodyId, Contact)> {
        let moving = self.bodies.get(id.index()).filter(|b| b.is_moving())?;
        let from = moving.aabb();
        let displacement = moving.velocity() * dt;
        let mut best: Option<(BodyId, Contact)> = None;
        for (si, stationary) in self.bodies().filter(|(_, b)| !b.is_moving()) {
            let Some(contact) = sweep(&from, &stationary.aabb(), displacement).contact() else {
                continue;
            };
            if best.is_none_or(|(_, b)| contact.time() < b.time()) {
                best = Some((si, contact));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;

    #[test]
    fn reflect_velocity_ignores_small_normal_components() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(
            reflect_velocity(v, Vec3::new(-1.0, 0.0, 0.0), 1e-4),
            Vec3::new(-1.0, -2.0, 3.0)
        );
        assert_eq!(reflect_velocity(v, Vec3::new(0.0, 5e-5, 0.0), 1e-4), v);
        assert_eq!(reflect_velocity(v, Vec3::ZERO, 1e-4), v);
    }

    #[test]
    fn empty_world_steps_without_contacts() {
        let mut world = World::new(WorldSettings::default());
        let report = world.step(0.012);
        assert_eq!(report, StepReport::default());
        assert_eq!(world.tick().index(), 1);
        assert!(world.transforms().is_empty());
    }

    #[test]
    fn stationary_body_keeps_its_velocity_when_hit() {
        let mut world = World::new(WorldSettings::default());
        let mover = world.insert(
            Body::new(BodyKind::Moving, Vec3::new(-0.3, 0.0, 0.0), Vec3::splat(0.1))
                .with_velocity(Vec3::new(10.0, 0.0, 0.0)),
        );
        let wall = world.insert(
            Body::new(BodyKind::Stationary, Vec3::ZERO, Vec3::splat(0.1))
                .with_velocity(Vec3::new(0.0, 0.5, 0.0)),
        );
        let report = world.step(0.1);
        assert_eq!(report.contacts.len(), 1);
        let event = report.contacts[0];
        assert_eq!((event.moving, event.stationary), (mover, wall));
        assert_eq!(world.body(wall).map(Body::velocity), Some(Vec3::new(0.0, 0.5, 0.0)));
        assert_eq!(
            world.body(mover).map(Body::velocity),
            Some(Vec3::new(-10.0, 0.0, 0.0))
        );
    }

    #[test]
    fn unknown_body_is_an_error() {
        let mut world = World::default();
        assert_eq!(world.resolve(0), Err(SimError::UnknownBody(0)));
        assert_eq!(
            world.set_velocity(BodyId(3), Vec3::ONE),
            Err(SimError::UnknownBody(3))
        );
    }
}
