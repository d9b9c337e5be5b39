//! Lean Rider - A motorbike balancing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lean dynamics, wind, scoring, game flow)
//! - `app`: Frame driver that owns the simulation and its collaborators
//! - `view`: Plain-data frame snapshot for whatever draws the game
//! - `platform`: Key mapping and fixed-rate clock
//! - `assets`: Bike sprites with placeholder fallback
//! - `autopilot`: Demo rider for attract mode
//! - `highscores`: Best-score record and its stores
//! - `persistence`: JSON files in the per-user data directory
//! - `settings`: Theme preference
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod assets;
pub mod autopilot;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod view;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use highscores::BestScore;
pub use settings::{Settings, Theme};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical frame rate
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Boost resource ceiling (also the starting amount)
    pub const BOOST_MAX: f32 = 100.0;
    /// Lean angle beyond which the rider goes down (degrees)
    pub const CRASH_ANGLE: f32 = 90.0;

    /// Score units per displayed meter
    pub const SCORE_PER_METER: u64 = 10;

    /// HUD boost bar width at full boost (pixels)
    pub const BOOST_BAR_WIDTH: f32 = 150.0;
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Wipeout banner
    pub const RED: Color = Color::rgb(255, 50, 50);
    /// Boost bar fill
    pub const NITRO: Color = Color::rgb(0, 200, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Score converted to the distance shown on the HUD (whole meters)
#[inline]
pub fn display_distance(score: u64) -> u64 {
    score / consts::SCORE_PER_METER
}
