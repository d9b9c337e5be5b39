//! Key mapping
//!
//! Riding keys are sampled as held state every tick; garage/retry keys are
//! edge-triggered and consumed by the next snapshot.

use std::collections::HashSet;

use crate::settings::Theme;
use crate::sim::{Controls, TickInput};

/// Keys the game cares about, independent of any input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key, compared case-insensitively
    Char(char),
    Space,
    Escape,
}

impl Key {
    fn normalized(self) -> Self {
        match self {
            Key::Char(' ') => Key::Space,
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}

/// Accumulates key events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    held: HashSet<Key>,
    pressed: Vec<Key>,
    quit: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        let key = key.normalized();
        // Auto-repeat arrives as repeated downs; only the first counts as a press
        if self.held.insert(key) {
            self.pressed.push(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key.normalized());
    }

    /// Window close or similar
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key.normalized())
    }

    /// Build the input for the next tick and consume one-shot presses
    pub fn snapshot(&mut self) -> TickInput {
        let mut input = TickInput {
            controls: Controls {
                lean_back: self.is_held(Key::Char('w')),
                lean_forward: self.is_held(Key::Char('s')),
                boost: self.is_held(Key::Space),
            },
            quit: self.quit,
            ..Default::default()
        };

        for key in self.pressed.drain(..) {
            match key {
                Key::Char('r') => input.retry = true,
                Key::Char('q') | Key::Escape => input.quit = true,
                Key::Char(c) => {
                    // First bike key of the tick wins
                    if input.select_vehicle.is_none() {
                        input.select_vehicle = vehicle_slot(c);
                    }
                    if let Some(theme) = Theme::from_key(c) {
                        input.select_theme = Some(theme);
                    }
                }
                Key::Space => {}
            }
        }

        input
    }
}

/// Garage slot for a digit key ('1' is slot 0)
pub fn vehicle_slot(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d) if d >= 1 => Some(d as usize - 1),
        _ => None,
    }
}
