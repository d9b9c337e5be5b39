//! Player preferences
//!
//! Persisted separately from the best score. Nothing in here may affect the
//! simulation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Color;
use crate::persistence;

/// Garage background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Black,
    White,
    Green,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Black, Theme::White, Theme::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Black => "BLACK",
            Theme::White => "WHITE",
            Theme::Green => "GREEN",
        }
    }

    /// Garage key that selects this theme
    pub fn key(&self) -> char {
        match self {
            Theme::Black => 'K',
            Theme::White => 'L',
            Theme::Green => 'G',
        }
    }

    /// Theme bound to a key (case-insensitive)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'K' => Some(Theme::Black),
            'L' => Some(Theme::White),
            'G' => Some(Theme::Green),
            _ => None,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Theme::Black => Color::rgb(15, 15, 25),
            Theme::White => Color::rgb(240, 240, 240),
            Theme::Green => Color::rgb(34, 139, 34),
        }
    }

    /// HUD text color readable on the background
    pub fn text(&self) -> Color {
        match self {
            Theme::White => Color::rgb(20, 20, 20),
            _ => Color::WHITE,
        }
    }

    /// Rain is darker on the light theme so it stays visible
    pub fn rain(&self) -> Color {
        match self {
            Theme::White => Color::rgb(100, 100, 150),
            _ => Color::rgb(200, 200, 255),
        }
    }

    /// Garage card fill
    pub fn card(&self) -> Color {
        match self {
            Theme::White => Color::rgb(200, 200, 200),
            _ => Color::rgb(40, 40, 50),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Garage and ride background
    pub theme: Theme,
}

impl Settings {
    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match persistence::read_json::<Settings>(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings (best effort)
    pub fn save(&self, path: &Path) {
        match persistence::write_json_atomic(path, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
        }
    }
}
