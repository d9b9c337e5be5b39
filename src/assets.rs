//! Bike sprites
//!
//! A missing or unreadable image never stops the game: the loader hands back a
//! flat ellipse in the bike's color instead and says so.

use std::path::{Path, PathBuf};

use crate::Color;
use crate::consts::SCREEN_HEIGHT;
use crate::sim::VehicleProfile;

/// Environment override for the asset directory
pub const ASSETS_ENV: &str = "LEAN_RIDER_ASSETS";

/// Sprite height while riding
pub const RIDE_SPRITE_HEIGHT: u32 = (SCREEN_HEIGHT * 0.18) as u32;
/// Sprite height on the garage cards
pub const THUMB_SPRITE_HEIGHT: u32 = 80;

/// How a sprite came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Loaded,
    Placeholder,
}

/// What to draw
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteSource {
    /// Encoded image bytes exactly as found on disk
    Image(Vec<u8>),
    /// Filled ellipse of the given size
    Ellipse { color: Color, width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub source: SpriteSource,
    pub status: AssetStatus,
    /// Height the frontend should scale to
    pub target_height: u32,
}

/// Ride sprite and garage thumbnail for one bike
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    pub ride: Sprite,
    pub thumb: Sprite,
}

/// Resolves and reads asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base: PathBuf,
}

impl AssetLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// `LEAN_RIDER_ASSETS` if set, else the working directory
    pub fn from_env() -> Self {
        let base = std::env::var_os(ASSETS_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.base.join(relative)
    }

    /// Load a bike sprite at `target_height`, falling back to a placeholder
    pub fn load_sprite(&self, profile: &VehicleProfile, target_height: u32) -> Sprite {
        if !profile.asset().is_empty() {
            let path = self.resolve(profile.asset());
            match std::fs::read(&path) {
                Ok(bytes) if !bytes.is_empty() => {
                    return Sprite {
                        source: SpriteSource::Image(bytes),
                        status: AssetStatus::Loaded,
                        target_height,
                    };
                }
                Ok(_) => log::warn!("Empty sprite {}, using placeholder", path.display()),
                Err(e) => log::warn!("Sprite {} unavailable ({}), using placeholder", path.display(), e),
            }
        }
        placeholder(profile.color(), target_height)
    }

    /// Both sprites for a bike
    pub fn load_set(&self, profile: &VehicleProfile) -> SpriteSet {
        SpriteSet {
            ride: self.load_sprite(profile, RIDE_SPRITE_HEIGHT),
            thumb: self.load_sprite(profile, THUMB_SPRITE_HEIGHT),
        }
    }
}

/// Stand-in sprite: an ellipse twice as wide as it is tall
pub fn placeholder(color: Color, target_height: u32) -> Sprite {
    Sprite {
        source: SpriteSource::Ellipse {
            color,
            width: target_height * 2,
            height: target_height,
        },
        status: AssetStatus::Placeholder,
        target_height,
    }
}
