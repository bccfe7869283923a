// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised while configuring or addressing a simulation.
///
/// Stepping itself is infallible; every variant here is caught at
/// construction time or when a caller names a body that does not exist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// The fixed physics step must be finite and strictly positive.
    #[error("physics step must be finite and > 0, got {0}")]
    InvalidStep(f64),
    /// The per-frame clamp must be a finite number of seconds.
    #[error("max frame delta must be finite, got {0}")]
    InvalidClamp(f64),
    /// The per-frame clamp has to admit at least one tick.
    #[error("max frame delta {max} is smaller than the physics step {step}")]
    ClampBelowStep {
        /// Configured clamp in seconds.
        max: f64,
        /// Configured physics step in seconds.
        step: f64,
    },
    /// The FPS sampling window must be finite and strictly positive.
    #[error("fps window must be finite and > 0, got {0}")]
    InvalidFpsWindow(f64),
    /// The normal epsilon must be finite and non-negative.
    #[error("normal epsilon must be finite and >= 0, got {0}")]
    InvalidEpsilon(f32),
    /// Boundary half-extents must be finite and strictly positive.
    #[error("boundary half-extents must be finite and > 0, got {0:?}")]
    InvalidBoundary([f32; 3]),
    /// Spin angles must be finite.
    #[error("spin must be finite, got {0:?}")]
    InvalidSpin([f32; 3]),
    /// A body description failed validation.
    #[error("body {index}: {reason}")]
    InvalidBody {
        /// Position of the body in the configuration list.
        index: usize,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// No body has this index.
    #[error("unknown body {0}")]
    UnknownBody(usize),
}
