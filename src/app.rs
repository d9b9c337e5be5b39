//! Frame driver
//!
//! Owns the simulation together with its collaborators (score store, wind RNG,
//! settings, sprites) and keeps them in step: every new best is written to the
//! store before the tick that produced it returns.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::PathBuf;

use crate::assets::{AssetLoader, SpriteSet};
use crate::highscores::{ScoreStore, load_best, save_best};
use crate::platform::FixedClock;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::view::FrameView;

pub struct App<S: ScoreStore> {
    state: GameState,
    store: S,
    gusts: Pcg32,
    clock: FixedClock,
    settings: Settings,
    settings_path: Option<PathBuf>,
    sprites: Vec<SpriteSet>,
    running: bool,
}

impl<S: ScoreStore> App<S> {
    /// Read the record from `store` and sit in the garage. Tuning that fails
    /// validation is replaced by the default preset.
    pub fn new(store: S, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        let best = load_best(&store);
        let state = GameState::new(seed, tuning)
            .with_best(best)
            .with_theme(settings.theme);
        Self {
            state,
            store,
            gusts: Pcg32::seed_from_u64(seed),
            clock: FixedClock::default(),
            settings,
            settings_path: None,
            sprites: Vec::new(),
            running: true,
        }
    }

    /// Save settings here whenever the theme changes
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Load sprites for every bike in the garage
    pub fn load_sprites(&mut self, loader: &AssetLoader) {
        self.sprites = self.state.garage.iter().map(|p| loader.load_set(p)).collect();
        let placeholders = self
            .sprites
            .iter()
            .filter(|s| s.ride.status == crate::assets::AssetStatus::Placeholder)
            .count();
        if placeholders > 0 {
            log::info!(
                "{} of {} bikes drawn with placeholders (assets in {})",
                placeholders,
                self.sprites.len(),
                loader.base().display()
            );
        }
    }

    /// Run exactly one tick. Returns false once quit was requested.
    pub fn step(&mut self, input: &TickInput) -> bool {
        if input.quit {
            self.running = false;
        }
        if !self.running {
            return false;
        }

        tick(&mut self.state, input, &mut self.gusts);

        for event in std::mem::take(&mut self.state.events) {
            match event {
                GameEvent::NewBest { best } => {
                    save_best(&mut self.store, best);
                }
                GameEvent::ThemeChanged(theme) => {
                    self.settings.theme = theme;
                    if let Some(path) = &self.settings_path {
                        self.settings.save(path);
                    }
                }
                GameEvent::RideStarted { .. } | GameEvent::Crashed { .. } | GameEvent::ReturnedToMenu => {}
            }
        }
        true
    }

    /// Feed wall-clock time; runs as many fixed ticks as are due.
    ///
    /// One-shot presses in `input` apply to the first tick only. Returns the
    /// number of ticks run.
    pub fn update(&mut self, dt: f32, input: &TickInput) -> u32 {
        let due = self.clock.advance(dt);
        let mut ran = 0;
        let mut input = input.clone();
        while ran < due && self.step(&input) {
            ran += 1;
            input.retry = false;
            input.select_vehicle = None;
            input.select_theme = None;
        }
        ran
    }

    /// Snapshot for drawing
    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sprites for a garage slot, once loaded
    pub fn sprites(&self, slot: usize) -> Option<&SpriteSet> {
        self.sprites.get(slot)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Orderly exit: write the record one last time and hand back the store
    pub fn shutdown(mut self) -> S {
        save_best(&mut self.store, self.state.session.best);
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryScoreStore;
    use crate::persistence;
    use crate::settings::Theme;
    use crate::sim::Controls;

    fn app_with_best(best: Option<u64>) -> App<MemoryScoreStore> {
        let store = MemoryScoreStore { best, writes: 0 };
        App::new(store, Tuning::standard(), Settings::default(), 42)
    }

    fn select(slot: usize) -> TickInput {
        TickInput {
            select_vehicle: Some(slot),
            ..Default::default()
        }
    }

    #[test]
    fn test_reads_record_at_startup() {
        let app = app_with_best(Some(900));
        assert_eq!(app.state().session.best, 900);
        assert_eq!(app.phase(), GamePhase::Menu);

        let app = app_with_best(None);
        assert_eq!(app.state().session.best, 0);
    }

    #[test]
    fn test_new_best_written_at_crash() {
        let mut app = app_with_best(Some(3));
        app.step(&select(0));
        for _ in 0..5 {
            app.step(&TickInput::default());
        }
        assert_eq!(app.store().writes, 0);

        app.state.vehicle.angle = 120.0;
        app.step(&TickInput::default());
        assert_eq!(app.phase(), GamePhase::GameOver);
        assert_eq!(app.store().best, Some(6));
        assert_eq!(app.store().writes, 1);
    }

    #[test]
    fn test_crash_below_record_not_written() {
        let mut app = app_with_best(Some(10_000));
        app.step(&select(2));
        app.state.vehicle.angle = -120.0;
        app.step(&TickInput::default());
        assert_eq!(app.phase(), GamePhase::GameOver);
        assert_eq!(app.store().writes, 0);
    }

    #[test]
    fn test_unusable_tuning_falls_back() {
        let store = MemoryScoreStore { best: None, writes: 0 };
        let tuning = Tuning {
            wind_limit: f32::MAX,
            ..Tuning::steady()
        };
        let mut app = App::new(store, tuning, Settings::default(), 42);
        assert_eq!(app.state().tuning, Tuning::default());

        // Past the first wind re-roll without trouble
        app.step(&select(2));
        for _ in 0..200 {
            app.step(&TickInput::default());
        }
        assert!(app.state().wind.force.abs() <= Tuning::default().wind_limit);
    }

    #[test]
    fn test_shutdown_writes_record() {
        let app = app_with_best(Some(77));
        let store = app.shutdown();
        assert_eq!(store.best, Some(77));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_quit_stops_stepping() {
        let mut app = app_with_best(None);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert!(!app.step(&quit));
        assert!(!app.is_running());
        assert!(!app.step(&select(0)));
        assert_eq!(app.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_update_applies_presses_once() {
        let mut app = app_with_best(None);
        // Two ticks due; selection applies to the first, the second rides
        let ran = app.update(2.0 / 60.0 + 1e-4, &select(0));
        assert_eq!(ran, 2);
        assert_eq!(app.phase(), GamePhase::Playing);
        assert_eq!(app.state().session.score, 1);

        let boost = TickInput {
            controls: Controls {
                boost: true,
                ..Default::default()
            },
            ..Default::default()
        };
        app.update(1.0 / 60.0, &boost);
        assert!(app.view().boosting);
    }

    #[test]
    fn test_theme_change_saved() {
        let dir = persistence::scratch_dir("app_theme");
        let path = dir.join("settings.json");
        let mut app = app_with_best(None).with_settings_path(&path);

        let pick = TickInput {
            select_theme: Some(Theme::White),
            ..Default::default()
        };
        app.step(&pick);
        assert_eq!(app.settings().theme, Theme::White);
        assert_eq!(Settings::load(&path).theme, Theme::White);
        assert_eq!(app.view().background, Theme::White.background());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_sprites_fall_back_to_placeholders() {
        let dir = persistence::scratch_dir("app_sprites");
        let mut app = app_with_best(None);
        app.load_sprites(&AssetLoader::new(&dir));
        let set = app.sprites(0).expect("sprites for slot 0");
        assert_eq!(set.ride.status, crate::assets::AssetStatus::Placeholder);
        assert!(app.sprites(3).is_none());

        // Physics unaffected by missing art
        app.step(&select(0));
        assert_eq!(app.phase(), GamePhase::Playing);
        let _ = std::fs::remove_dir_all(dir);
    }
}
