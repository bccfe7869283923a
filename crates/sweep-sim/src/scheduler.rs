// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-timestep accumulator.
//!
//! Frame time is measured against the clock reading of the last frame that
//! ran physics. A frame only engages once more than one step has elapsed;
//! the elapsed time is then clamped, added to the accumulator, and drained
//! in whole steps. Leftover time carries into the next engaged frame, so
//! unless a frame hits the clamp no elapsed time is dropped or counted
//! twice; chunking the clock readings differently can only move a tick to a
//! later frame.

use crate::error::SimError;

/// Result of an engaged frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Advance {
    /// Whole steps to run, back-to-back, before presenting.
    pub ticks: u32,
    /// The measured frame time exceeded the clamp and was cut down.
    pub clamped: bool,
}

/// Accumulator state for a fixed physics step.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    step: f64,
    max_frame_delta: f64,
    accumulated: f64,
    last_tick_clock: f64,
}

impl FixedStep {
    /// Creates an accumulator whose first frame is measured from `start`.
    pub fn new(step: f64, max_frame_delta: f64, start: f64) -> Result<Self, SimError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(SimError::InvalidStep(step));
        }
        if !max_frame_delta.is_finite() {
            return Err(SimError::InvalidClamp(max_frame_delta));
        }
        if max_frame_delta < step {
            return Err(SimError::ClampBelowStep {
                max: max_frame_delta,
                step,
            });
        }
        Ok(Self {
            step,
            max_frame_delta,
            accumulated: 0.0,
            last_tick_clock: start,
        })
    }

    /// Physics step in seconds.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Largest frame time admitted per engaged frame.
    #[must_use]
    pub fn max_frame_delta(&self) -> f64 {
        self.max_frame_delta
    }

    /// Seconds banked but not yet ticked; always in `[0, step)` between
    /// frames.
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Clock reading of the last engaged frame.
    #[must_use]
    pub fn last_tick_clock(&self) -> f64 {
        self.last_tick_clock
    }

    /// Time owed to the simulation at `now`: the banked remainder plus
    /// whatever has elapsed since the last engaged frame.
    #[must_use]
    pub fn pending(&self, now: f64) -> f64 {
        self.accumulated + (now - self.last_tick_clock)
    }

    /// Returns `true` if a frame at `now` would engage.
    #[must_use]
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_tick_clock > self.step
    }

    /// Accounts for a frame at `now`.
    ///
    /// Returns `None` when no more than one step has elapsed since the last
    /// engaged frame; the elapsed time is then left on the clock, not in the
    /// accumulator. Otherwise returns how many ticks to run.
    pub fn advance(&mut self, now: f64) -> Option<Advance> {
        let frame_time = now - self.last_tick_clock;
        if frame_time <= self.step {
            return None;
        }
        self.last_tick_clock = now;

        let clamped = frame_time > self.max_frame_delta;
        self.accumulated += frame_time.min(self.max_frame_delta);

        let mut ticks = 0u32;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            ticks = ticks.saturating_add(1);
        }
        Some(Advance { ticks, clamped })
    }
}
