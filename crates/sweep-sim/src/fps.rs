// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame-rate counter sampled over a fixed wall-clock window.

/// One FPS measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsSample {
    /// Frames presented during the window.
    pub frames: u32,
    /// Seconds the window actually covered (at least the configured window).
    pub elapsed: f64,
    /// `frames / elapsed`.
    pub fps: f64,
}

impl FpsSample {
    /// Title text, e.g. `FPS: 59`. The rate is truncated, not rounded.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for FpsSample {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FPS: {}", self.fps.trunc() as u64)
    }
}

/// Counts presented frames and reports a rate once per window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: f64,
    frames: u32,
    last_sample: f64,
}

impl FpsCounter {
    /// New counter whose first window starts at `start`.
    #[must_use]
    pub fn new(window: f64, start: f64) -> Self {
        Self {
            window,
            frames: 0,
            last_sample: start,
        }
    }

    /// Window length in seconds.
    #[must_use]
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Frames counted since the last sample.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Counts one presented frame.
    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Emits a sample and restarts the window once more than `window`
    /// seconds have passed since the previous sample.
    pub fn sample(&mut self, now: f64) -> Option<FpsSample> {
        let elapsed = now - self.last_sample;
        if elapsed <= self.window {
            return None;
        }
        let sample = FpsSample {
            frames: self.frames,
            elapsed,
            fps: f64::from(self.frames) / elapsed,
        };
        self.frames = 0;
        self.last_sample = now;
        Some(sample)
    }
}
