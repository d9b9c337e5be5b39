//! Demo rider
//!
//! Drives the bike in attract mode. It steers the angular velocity toward one
//! that would bring the bike back upright, and only boosts when things are calm.

use crate::sim::{Controls, VehicleState};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Desired return velocity per degree of lean
    pub gain: f32,
    /// Velocity error tolerated before touching the keys
    pub deadband: f32,
    /// Boost only within this many degrees of upright
    pub boost_window: f32,
    /// Boost only while this much resource remains
    pub boost_reserve: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            gain: 0.05,
            deadband: 0.02,
            boost_window: 5.0,
            boost_reserve: 40.0,
        }
    }
}

impl Autopilot {
    /// Keys to hold this tick
    pub fn controls(&self, vehicle: &VehicleState) -> Controls {
        let wanted = -vehicle.angle * self.gain;
        let error = vehicle.angular_vel - wanted;

        let calm = vehicle.angle.abs() < self.boost_window && error.abs() < self.deadband * 5.0;

        Controls {
            lean_back: error > self.deadband,
            lean_forward: error < -self.deadband,
            boost: calm && vehicle.boost > self.boost_reserve,
        }
    }
}
