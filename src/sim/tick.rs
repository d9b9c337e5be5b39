//! Fixed timestep simulation tick
//!
//! Runs the garage → ride → wipeout flow. Exactly one phase handler runs per
//! tick, so a tick never performs more than one transition.

use super::state::{GameEvent, GamePhase, GameState, TickInput};
use super::vehicle::Controls;
use super::wind::GustSource;

/// Advance the game state by one fixed timestep
///
/// Events raised by this tick are left in `state.events`.
pub fn tick<G: GustSource + ?Sized>(state: &mut GameState, input: &TickInput, gusts: &mut G) {
    state.events.clear();

    match state.phase {
        GamePhase::Menu => {
            if let Some(theme) = input.select_theme {
                if theme != state.theme {
                    state.theme = theme;
                    log::debug!("Theme set to {}", theme.as_str());
                    state.events.push(GameEvent::ThemeChanged(theme));
                }
            }
            if let Some(slot) = input.select_vehicle {
                state.start_ride(slot);
            }
        }

        GamePhase::Playing => ride(state, input.controls, gusts),

        GamePhase::GameOver => {
            if input.retry {
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
            }
        }
    }
}

/// One tick of riding: wind, lean, score, crash check
fn ride<G: GustSource + ?Sized>(state: &mut GameState, controls: Controls, gusts: &mut G) {
    let Some(profile) = state.selected.and_then(|slot| state.garage.get(slot)) else {
        log::warn!("Riding without a bike, returning to garage");
        state.phase = GamePhase::Menu;
        return;
    };

    state.ride_ticks += 1;

    let wind = state.wind.tick(&state.tuning, gusts);
    state.rain.tick(wind, profile.speed());

    state.boosting = state.vehicle.tick(
        profile,
        &state.tuning,
        controls,
        state.session.score,
        wind,
    );
    state.session.advance(state.boosting, &state.tuning);

    if state.vehicle.is_crashed() {
        let score = state.session.score;
        state.phase = GamePhase::GameOver;
        log::info!(
            "Wipeout at {:.1}° after {} ticks, {}m",
            state.vehicle.angle,
            state.ride_ticks,
            state.session.distance()
        );
        state.events.push(GameEvent::Crashed { score });

        let (best, changed) = state.session.record_if_best(score);
        if changed {
            log::info!("New best: {}", best);
            state.events.push(GameEvent::NewBest { best });
        }
    }
}
