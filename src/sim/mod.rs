//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through an injected `GustSource` (rain has its own seed)
//! - No rendering or platform dependencies

pub mod profile;
pub mod rain;
pub mod session;
pub mod state;
pub mod tick;
pub mod vehicle;
pub mod wind;

pub use profile::{ProfileError, VehicleProfile, garage};
pub use rain::{RainDrop, RainField};
pub use session::Session;
pub use state::{GameEvent, GamePhase, GameState, TickInput};
pub use tick::tick;
pub use vehicle::{Controls, RIDE_ANCHOR, VehicleState};
pub use wind::{GustSource, ScriptedGusts, Wind};
