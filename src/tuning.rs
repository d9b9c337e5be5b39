//! Game balance constants
//!
//! Everything that shapes how the ride feels lives here so it can be tweaked
//! from a JSON file without a rebuild. Two presets ship with the game; neither
//! is privileged beyond `standard` being the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Tunable balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Score divisor for the difficulty term added to gravity
    pub difficulty_divisor: f32,
    /// Gravity multiplier while boosting (sub-unity)
    pub boost_gravity_factor: f32,
    /// Lean responsiveness multiplier while boosting (> 1)
    pub boost_lean_factor: f32,
    /// Boost resource spent per boosting tick
    pub boost_drain: f32,
    /// Boost resource recovered per non-boosting tick
    pub boost_regen: f32,
    /// Score gained per tick while cruising
    pub cruise_score_per_tick: u64,
    /// Score gained per tick while boosting
    pub boost_score_per_tick: u64,
    /// Wind target range (symmetric, force units)
    pub wind_limit: f32,
    /// Fraction of the gap to the wind target closed each tick
    pub wind_smoothing: f32,
    /// Ticks between wind target re-rolls
    pub wind_period: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl Tuning {
    /// Largest accepted wind target (force units)
    pub const MAX_WIND_LIMIT: f32 = 1.0;

    /// Sharper ride: harder difficulty ramp, hungrier boost
    pub fn standard() -> Self {
        Self {
            difficulty_divisor: 50_000.0,
            boost_gravity_factor: 0.6,
            boost_lean_factor: 1.5,
            boost_drain: 0.7,
            boost_regen: 0.15,
            cruise_score_per_tick: 1,
            boost_score_per_tick: 2,
            wind_limit: 0.012,
            wind_smoothing: 0.02,
            wind_period: 180,
        }
    }

    /// Gentler boost economy
    pub fn steady() -> Self {
        Self {
            difficulty_divisor: 45_000.0,
            boost_lean_factor: 1.4,
            boost_drain: 0.6,
            boost_regen: 0.1,
            ..Self::standard()
        }
    }

    pub fn from_preset_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" => Some(Self::standard()),
            "steady" => Some(Self::steady()),
            _ => None,
        }
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.difficulty_divisor.is_finite() || self.difficulty_divisor <= 0.0 {
            return Err(TuningError::new("difficulty_divisor", "must be finite and positive"));
        }
        if !(self.boost_gravity_factor > 0.0 && self.boost_gravity_factor < 1.0) {
            return Err(TuningError::new("boost_gravity_factor", "must be in (0, 1)"));
        }
        if !(self.boost_lean_factor.is_finite() && self.boost_lean_factor > 1.0) {
            return Err(TuningError::new("boost_lean_factor", "must be finite and above 1"));
        }
        if !(self.boost_drain.is_finite() && self.boost_drain > 0.0) {
            return Err(TuningError::new("boost_drain", "must be finite and positive"));
        }
        if !(self.boost_regen.is_finite() && self.boost_regen >= 0.0) {
            return Err(TuningError::new("boost_regen", "must be finite and non-negative"));
        }
        if !(self.wind_limit >= 0.0 && self.wind_limit <= Self::MAX_WIND_LIMIT) {
            return Err(TuningError::new("wind_limit", "must be in [0, 1]"));
        }
        if !(self.wind_smoothing > 0.0 && self.wind_smoothing <= 1.0) {
            return Err(TuningError::new("wind_smoothing", "must be in (0, 1]"));
        }
        if self.wind_period == 0 {
            return Err(TuningError::new("wind_period", "must be at least one tick"));
        }
        Ok(())
    }

    /// `self` if it validates, otherwise the default preset (logged)
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("{}, falling back to default tuning", e);
                Self::default()
            }
        }
    }

    /// Load tuning from a JSON file, falling back to the default preset
    ///
    /// Missing fields take their `standard` values. An unreadable, malformed or
    /// invalid file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No tuning file at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Tuning>(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning.validated_or_default()
            }
            Err(e) => {
                log::warn!("Malformed tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// A tuning value the simulation cannot work with
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl TuningError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tuning `{}`: {}", self.field, self.reason)
    }
}

impl std::error::Error for TuningError {}
