//! Vehicle profiles
//!
//! A profile is chosen in the garage and never changes during a ride.

use std::fmt;

use crate::Color;

/// Static handling characteristics of a bike
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleProfile {
    name: String,
    gravity: f32,
    lean: f32,
    speed: f32,
    color: Color,
    asset: String,
}

impl VehicleProfile {
    /// Build a profile, rejecting values the dynamics cannot handle
    pub fn new(
        name: impl Into<String>,
        gravity: f32,
        lean: f32,
        speed: f32,
        color: Color,
        asset: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !gravity.is_finite() || gravity < 0.0 {
            return Err(ProfileError::OutOfRange { field: "gravity", value: gravity });
        }
        if !lean.is_finite() || lean <= 0.0 {
            return Err(ProfileError::OutOfRange { field: "lean", value: lean });
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ProfileError::OutOfRange { field: "speed", value: speed });
        }
        Ok(Self {
            name,
            gravity,
            lean,
            speed,
            color,
            asset: asset.into(),
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base gravity coefficient (tip acceleration per degree of lean)
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Angular velocity change per tick of lean input
    pub fn lean(&self) -> f32 {
        self.lean
    }

    /// Forward-speed multiplier (scenery scroll only)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sprite path relative to the asset directory
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Built-in values known to be valid
    fn builtin(name: &str, gravity: f32, lean: f32, speed: f32, color: Color, asset: &str) -> Self {
        Self {
            name: name.to_string(),
            gravity,
            lean,
            speed,
            color,
            asset: asset.to_string(),
        }
    }
}

/// The bikes on offer in the garage, in key order (1, 2, 3)
pub fn garage() -> Vec<VehicleProfile> {
    vec![
        VehicleProfile::builtin(
            "Agile Scout",
            0.0012,
            0.12,
            0.9,
            Color::rgb(100, 255, 100),
            "assets/bike1.png",
        ),
        VehicleProfile::builtin(
            "Balanced Pro",
            0.0022,
            0.08,
            1.1,
            Color::rgb(100, 180, 255),
            "assets/bike2.png",
        ),
        VehicleProfile::builtin(
            "Heavy Beast",
            0.0038,
            0.05,
            1.5,
            Color::rgb(255, 80, 80),
            "assets/bike3.jpg",
        ),
    ]
}

/// Why a profile was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    EmptyName,
    OutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::EmptyName => write!(f, "vehicle profile needs a name"),
            ProfileError::OutOfRange { field, value } => {
                write!(f, "vehicle profile `{}` out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garage_profiles_pass_validation() {
        for p in garage() {
            let rebuilt =
                VehicleProfile::new(p.name(), p.gravity(), p.lean(), p.speed(), p.color(), p.asset());
            assert_eq!(rebuilt.as_ref(), Ok(&p));
        }
    }

    #[test]
    fn test_heavier_bikes_tip_faster() {
        let g = garage();
        assert_eq!(g.len(), 3);
        assert!(g[0].gravity() < g[1].gravity());
        assert!(g[1].gravity() < g[2].gravity());
        assert!(g[0].lean() > g[2].lean());
    }

    #[test]
    fn test_rejects_bad_values() {
        let c = Color::WHITE;
        assert_eq!(
            VehicleProfile::new("  ", 0.001, 0.1, 1.0, c, "x.png"),
            Err(ProfileError::EmptyName)
        );
        assert!(matches!(
            VehicleProfile::new("Bad", f32::NAN, 0.1, 1.0, c, "x.png"),
            Err(ProfileError::OutOfRange { field: "gravity", .. })
        ));
        assert!(matches!(
            VehicleProfile::new("Bad", 0.001, 0.0, 1.0, c, "x.png"),
            Err(ProfileError::OutOfRange { field: "lean", .. })
        ));
        assert!(matches!(
            VehicleProfile::new("Bad", 0.001, 0.1, -1.0, c, "x.png"),
            Err(ProfileError::OutOfRange { field: "speed", .. })
        ));
    }

    #[test]
    fn test_missing_asset_is_still_a_valid_profile() {
        let p = VehicleProfile::new("Ghost", 0.002, 0.1, 1.0, Color::WHITE, "").unwrap();
        assert_eq!(p.asset(), "");
    }
}
