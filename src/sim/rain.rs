//! Rain streaks blown by the wind
//!
//! Purely visual. The field owns its own RNG so it can never shift the wind
//! sequence that the physics depends on.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Maximum drops on screen
pub const MAX_DROPS: usize = 60;
/// Horizontal drift per unit of wind force per tick
pub const WIND_DRIFT: f32 = 300.0;
/// Streak slant per unit of wind force
pub const WIND_SLANT: f32 = 500.0;
/// Vertical length of a streak
pub const STREAK_LENGTH: f32 = 8.0;

/// Spawn band to either side of the screen (rain blows in from off-screen)
const SIDE_MARGIN: f32 = 200.0;

/// A single falling drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub pos: Vec2,
    /// Pixels per tick
    pub fall: f32,
}

#[derive(Debug, Clone)]
pub struct RainField {
    pub drops: Vec<RainDrop>,
    rng: Pcg32,
}

impl RainField {
    pub fn new(seed: u64) -> Self {
        Self {
            drops: Vec::with_capacity(MAX_DROPS),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn, move and recycle drops for one tick
    ///
    /// `speed` is the bike's forward-speed multiplier; faster bikes make the
    /// rain rush past quicker.
    pub fn tick(&mut self, wind: f32, speed: f32) {
        if self.drops.len() < MAX_DROPS {
            let drop = RainDrop {
                pos: Vec2::new(self.random_x(), self.rng.random_range(-100.0..=0.0)),
                fall: self.rng.random_range(7.0..=12.0),
            };
            self.drops.push(drop);
        }

        for i in 0..self.drops.len() {
            let mut drop = self.drops[i];
            drop.pos.y += drop.fall * speed;
            drop.pos.x += wind * WIND_DRIFT;
            if drop.pos.y > SCREEN_HEIGHT {
                drop.pos.y = self.rng.random_range(-50.0..=-10.0);
                drop.pos.x = self.random_x();
            }
            self.drops[i] = drop;
        }
    }

    /// Line segments to draw, slanted by the wind
    pub fn streaks(&self, wind: f32) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.drops.iter().map(move |d| {
            let end = Vec2::new(d.pos.x + wind * WIND_SLANT, d.pos.y + STREAK_LENGTH);
            (d.pos, end)
        })
    }

    fn random_x(&mut self) -> f32 {
        self.rng
            .random_range(-SIDE_MARGIN..=SCREEN_WIDTH + SIDE_MARGIN)
    }
}
