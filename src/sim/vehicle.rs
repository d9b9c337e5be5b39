//! Lean dynamics
//!
//! The bike is an inverted pendulum in one angle: any tilt feeds back into
//! angular velocity, so doing nothing at a non-zero angle means falling over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::profile::VehicleProfile;
use crate::consts::{BOOST_MAX, CRASH_ANGLE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Held riding keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub lean_back: bool,
    pub lean_forward: bool,
    pub boost: bool,
}

/// Where the bike sits on screen (it never moves)
pub const RIDE_ANCHOR: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 100.0);

/// Mutable ride state of the selected bike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Lean angle in degrees (0 = upright, sign = direction)
    pub angle: f32,
    /// Degrees per tick
    pub angular_vel: f32,
    /// Boost resource, always within [0, BOOST_MAX]
    pub boost: f32,
    /// Screen anchor for drawing
    pub anchor: Vec2,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            angular_vel: 0.0,
            boost: BOOST_MAX,
            anchor: RIDE_ANCHOR,
        }
    }
}

impl VehicleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. Returns whether boost was active this tick.
    ///
    /// `score` is the session score before this tick's increment; it ramps
    /// gravity up as the ride goes on.
    pub fn tick(
        &mut self,
        profile: &VehicleProfile,
        tuning: &Tuning,
        controls: Controls,
        score: u64,
        wind: f32,
    ) -> bool {
        let mut gravity = profile.gravity() + score as f32 / tuning.difficulty_divisor;
        let mut lean = profile.lean();

        let boosting = controls.boost && self.boost > 0.0;
        if boosting {
            gravity *= tuning.boost_gravity_factor;
            lean *= tuning.boost_lean_factor;
        }

        self.angular_vel += self.angle * gravity + wind;
        if controls.lean_back {
            self.angular_vel -= lean;
        }
        if controls.lean_forward {
            self.angular_vel += lean;
        }
        self.angle += self.angular_vel;

        if boosting {
            self.boost = (self.boost - tuning.boost_drain).max(0.0);
        } else if self.boost < BOOST_MAX {
            self.boost = (self.boost + tuning.boost_regen).min(BOOST_MAX);
        }

        boosting
    }

    /// Tipped past the point of no return
    #[inline]
    pub fn is_crashed(&self) -> bool {
        self.angle.abs() > CRASH_ANGLE
    }

    /// Boost resource as 0..=1
    #[inline]
    pub fn boost_fraction(&self) -> f32 {
        self.boost / BOOST_MAX
    }
}
