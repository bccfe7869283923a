// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{debug, trace};

use crate::clock::Clock;
use crate::fps::{FpsCounter, FpsSample};
use crate::ports::PresentPort;
use crate::scheduler::FixedStep;
use crate::world::{BoundaryReflection, ContactEvent, World};

/// What one call to [`Simulation::frame`] did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    /// Clock reading the frame was run at.
    pub now: f64,
    /// Ticks run before presenting (zero when gated).
    pub ticks: u32,
    /// The frame time was cut to the clamp.
    pub clamped: bool,
    /// FPS sample published to the title, if the window rolled over.
    pub fps: Option<FpsSample>,
    /// Contacts resolved, in tick order.
    pub contacts: Vec<ContactEvent>,
    /// Boundary reflections, in tick order.
    pub reflections: Vec<BoundaryReflection>,
}

/// The frame loop: a [`World`], its fixed-step accumulator, and an FPS
/// counter.
///
/// Each frame reads the clock once. If more than one physics step has
/// passed since the last engaged frame, the FPS window is checked, the
/// elapsed time is banked, and whole ticks are run. The frame is presented
/// either way.
#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    scheduler: FixedStep,
    fps: FpsCounter,
    frames: u64,
}

impl Simulation {
    /// Assembles a simulation from parts.
    #[must_use]
    pub fn new(world: World, scheduler: FixedStep, fps: FpsCounter) -> Self {
        Self {
            world,
            scheduler,
            fps,
            frames: 0,
        }
    }

    /// The simulated world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access, e.g. to push a body between frames.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Accumulator state.
    #[must_use]
    pub fn scheduler(&self) -> &FixedStep {
        &self.scheduler
    }

    /// FPS counter state.
    #[must_use]
    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame at the clock's current reading.
    pub fn frame<C, P>(&mut self, clock: &C, port: &mut P) -> FrameReport
    where
        C: Clock + ?Sized,
        P: PresentPort + ?Sized,
    {
        self.frame_at(clock.now(), port)
    }

    /// Runs one frame at an explicit clock reading.
    pub fn frame_at<P>(&mut self, now: f64, port: &mut P) -> FrameReport
    where
        P: PresentPort + ?Sized,
    {
        let mut report = FrameReport {
            now,
            ..FrameReport::default()
        };

        if let Some(advance) = self.scheduler.advance(now) {
            if let Some(sample) = self.fps.sample(now) {
                debug!(fps = sample.fps, frames = sample.frames, "fps sample");
                port.set_title(&sample.label());
                report.fps = Some(sample);
            }
            if advance.clamped {
                debug!(now, max = self.scheduler.max_frame_delta(), "frame time clamped");
            }

            let dt = self.scheduler.step() as f32;
            for _ in 0..advance.ticks {
                let step = self.world.step(dt);
                report.contacts.extend(step.contacts);
                report.reflections.extend(step.reflections);
            }
            report.ticks = advance.ticks;
            report.clamped = advance.clamped;
            trace!(now, ticks = advance.ticks, "frame engaged");
        }

        port.present(&self.world.transforms());
        self.fps.record_frame();
        self.frames += 1;
        report
    }
}
