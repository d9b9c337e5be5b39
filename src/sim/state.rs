//! Game state and flow types
//!
//! Everything the simulation mutates lives in [`GameState`]; the tick function
//! is the only writer.

use serde::{Deserialize, Serialize};

use super::profile::{VehicleProfile, garage};
use super::rain::RainField;
use super::session::Session;
use super::vehicle::{Controls, VehicleState};
use super::wind::Wind;
use crate::settings::Theme;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Garage: pick a bike and a theme
    #[default]
    Menu,
    /// Riding
    Playing,
    /// Crashed, waiting for retry
    GameOver,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held riding keys
    pub controls: Controls,
    /// Retry key pressed this tick
    pub retry: bool,
    /// Garage slot picked this tick (0-based)
    pub select_vehicle: Option<usize>,
    /// Theme picked this tick
    pub select_theme: Option<Theme>,
    /// Window closed / quit key
    pub quit: bool,
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A ride began on the given garage slot
    RideStarted { slot: usize },
    /// Presentation theme changed in the garage
    ThemeChanged(Theme),
    /// The bike went down
    Crashed { score: u64 },
    /// The record was beaten and must be persisted
    NewBest { best: u64 },
    /// Back in the garage
    ReturnedToMenu,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values
    pub tuning: Tuning,
    /// Bikes on offer, in key order
    pub garage: Vec<VehicleProfile>,
    /// Current phase
    pub phase: GamePhase,
    /// Slot of the bike being ridden (or last ridden)
    pub selected: Option<usize>,
    /// Ride state of the selected bike
    pub vehicle: VehicleState,
    /// Wind carries over between rides
    pub wind: Wind,
    /// Score and record
    pub session: Session,
    /// Boost was active on the last tick
    pub boosting: bool,
    /// Presentation theme
    pub theme: Theme,
    /// Ticks spent riding in the current session
    pub ride_ticks: u64,
    /// Visual rain (not gameplay-affecting)
    pub rain: RainField,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh garage state. `seed` drives the rain field; a `tuning` that
    /// fails validation is replaced by the default preset.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning: tuning.validated_or_default(),
            garage: garage(),
            phase: GamePhase::Menu,
            selected: None,
            vehicle: VehicleState::new(),
            wind: Wind::new(),
            session: Session::new(0),
            boosting: false,
            theme: Theme::default(),
            ride_ticks: 0,
            rain: RainField::new(seed ^ 0x5241_494E),
            events: Vec::new(),
        }
    }

    /// Start with a previously recorded best
    pub fn with_best(mut self, best: u64) -> Self {
        self.session.best = best;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Profile of the selected bike
    pub fn profile(&self) -> Option<&VehicleProfile> {
        self.selected.and_then(|slot| self.garage.get(slot))
    }

    /// Begin a ride on `slot`. Returns false (and changes nothing) for an
    /// empty slot.
    pub(crate) fn start_ride(&mut self, slot: usize) -> bool {
        if slot >= self.garage.len() {
            log::debug!("Ignoring selection of empty garage slot {}", slot);
            return false;
        }
        self.selected = Some(slot);
        self.vehicle = VehicleState::new();
        self.session.reset();
        self.boosting = false;
        self.ride_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!("Ride started on {}", self.garage[slot].name());
        self.events.push(GameEvent::RideStarted { slot });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tuning_replaced_by_default() {
        let broken = Tuning {
            difficulty_divisor: 0.0,
            ..Tuning::steady()
        };
        let state = GameState::new(1, broken);
        assert_eq!(state.tuning, Tuning::default());

        let state = GameState::new(1, Tuning::steady());
        assert_eq!(state.tuning, Tuning::steady());
    }
}
