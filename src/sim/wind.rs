//! Wind disturbance
//!
//! A slowly varying sideways torque. Every `wind_period` ticks a new target is
//! drawn from `[-wind_limit, wind_limit]`; the live force eases toward it.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Source of new wind targets
///
/// Any `rand` generator works; tests and replays use [`ScriptedGusts`].
pub trait GustSource {
    /// Draw a target within `[-limit, limit]`
    fn next_target(&mut self, limit: f32) -> f32;
}

impl<R: RngCore> GustSource for R {
    fn next_target(&mut self, limit: f32) -> f32 {
        // The sampled span must stay finite
        if !(limit > 0.0 && limit <= Tuning::MAX_WIND_LIMIT) {
            return 0.0;
        }
        self.random_range(-limit..=limit)
    }
}

/// Replays a fixed list of targets, cycling when exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedGusts {
    targets: Vec<f32>,
    cursor: usize,
}

impl ScriptedGusts {
    pub fn new(targets: Vec<f32>) -> Self {
        Self { targets, cursor: 0 }
    }

    /// Always calm
    pub fn calm() -> Self {
        Self::new(Vec::new())
    }
}

impl GustSource for ScriptedGusts {
    fn next_target(&mut self, limit: f32) -> f32 {
        if self.targets.is_empty() || limit.is_nan() || limit < 0.0 {
            return 0.0;
        }
        let target = self.targets[self.cursor % self.targets.len()];
        self.cursor = self.cursor.wrapping_add(1);
        target.clamp(-limit, limit)
    }
}

/// Live wind state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Force applied this tick
    pub force: f32,
    /// Value the force is easing toward
    pub target: f32,
    /// Ticks since creation (wraps)
    pub ticks: u32,
}

impl Wind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and return the force to apply
    pub fn tick<G: GustSource + ?Sized>(&mut self, tuning: &Tuning, gusts: &mut G) -> f32 {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % tuning.wind_period.max(1) == 0 {
            self.target = gusts.next_target(tuning.wind_limit);
            log::debug!("Wind target now {:+.4}", self.target);
        }
        self.force += (self.target - self.force) * tuning.wind_smoothing;
        self.force
    }
}
