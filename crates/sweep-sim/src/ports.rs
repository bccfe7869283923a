// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for presentation layers (windows, recorders, headless runs)
//! to receive frame output without the simulation depending on a renderer.

use crate::world::FrameTransforms;

/// Receives what the loop produces each frame.
///
/// Implementations are expected to be cheap; they run on the loop thread
/// between ticks.
pub trait PresentPort {
    /// Draw one frame: one model matrix per body, in body order.
    fn present(&mut self, frame: &FrameTransforms);

    /// Replace the window title (called with the FPS label).
    fn set_title(&mut self, title: &str);
}

/// Port that discards everything; for headless runs and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPort;

impl PresentPort for NullPort {
    fn present(&mut self, _frame: &FrameTransforms) {}

    fn set_title(&mut self, _title: &str) {}
}

impl<P: PresentPort + ?Sized> PresentPort for &mut P {
    fn present(&mut self, frame: &FrameTransforms) {
        (**self).present(frame);
    }

    fn set_title(&mut self, title: &str) {
        (**self).set_title(title);
    }
}
