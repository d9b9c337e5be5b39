//! Fixed-rate tick scheduling

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Turns variable frame times into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    accumulator: f32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedClock {
    /// Longest frame time honored; anything longer (debugger, suspended
    /// window) is treated as this
    pub const MAX_FRAME: f32 = 0.1;

    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Add elapsed seconds and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, Self::MAX_FRAME);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
