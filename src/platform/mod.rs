//! Platform abstraction layer
//!
//! Handles the bits between a windowing/terminal frontend and the simulation:
//! - Input: key events to per-tick `TickInput` snapshots
//! - Time: fixed-rate tick scheduling from wall-clock frame times

pub mod clock;
pub mod input;

pub use clock::FixedClock;
pub use input::{InputSampler, Key};
