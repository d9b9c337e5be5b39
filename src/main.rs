//! Lean Rider entry point
//!
//! Native build runs a headless attract-mode ride: the autopilot picks a bike,
//! rides until it wipes out, and the best score is kept on disk. A graphical
//! frontend drives `lean_rider::App` the same way, feeding it key events and
//! drawing each `FrameView`.

use anyhow::Context;

use lean_rider::app::App;
use lean_rider::assets::AssetLoader;
use lean_rider::autopilot::Autopilot;
use lean_rider::consts::{SIM_DT, SIM_HZ};
use lean_rider::highscores::FileScoreStore;
use lean_rider::platform::{InputSampler, Key};
use lean_rider::settings::Settings;
use lean_rider::sim::GamePhase;
use lean_rider::tuning::Tuning;
use lean_rider::{display_distance, persistence};

/// Environment override for the wind seed
const SEED_ENV: &str = "LEAN_RIDER_SEED";
/// Attract mode gives up after ten simulated minutes
const MAX_DEMO_TICKS: u64 = 10 * 60 * SIM_HZ as u64;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Lean Rider (native) starting...");

    let data_dir = persistence::data_dir().context("failed to prepare data directory")?;
    let settings_path = data_dir.join("settings.json");
    let settings = Settings::load(&settings_path);
    let tuning = Tuning::load_or_default(&data_dir.join("tuning.json"));
    let seed = seed_from_env()?;
    log::info!("Wind seed {}", seed);

    let store = FileScoreStore::in_dir(&data_dir);
    let mut app = App::new(store, tuning, settings, seed).with_settings_path(settings_path);
    app.load_sprites(&AssetLoader::from_env());

    let slot = (seed % app.state().garage.len().max(1) as u64) as usize;
    let mut keys = InputSampler::new();
    let digit = char::from_digit(slot as u32 + 1, 10).context("garage slot has no key")?;
    keys.key_down(Key::Char(digit));
    app.update(SIM_DT, &keys.snapshot());
    keys.key_up(Key::Char(digit));

    let bike = app
        .state()
        .profile()
        .map(|p| p.name().to_string())
        .context("attract mode did not start a ride")?;
    log::info!("Autopilot riding {}", bike);

    let pilot = Autopilot::default();
    let mut ticks = 0;
    while app.phase() == GamePhase::Playing && ticks < MAX_DEMO_TICKS {
        let controls = pilot.controls(&app.state().vehicle);
        for (held, key) in [
            (controls.lean_back, Key::Char('w')),
            (controls.lean_forward, Key::Char('s')),
            (controls.boost, Key::Space),
        ] {
            if held {
                keys.key_down(key);
            } else {
                keys.key_up(key);
            }
        }
        ticks += app.update(SIM_DT, &keys.snapshot()) as u64;
    }

    let view = app.view();
    match view.phase {
        GamePhase::GameOver => println!(
            "{} wiped out after {:.1}s: {}m (best {}m)",
            bike,
            ticks as f32 * SIM_DT,
            view.distance,
            view.best_distance
        ),
        _ => println!(
            "{} still upright after {:.0}s: {}m (best {}m)",
            bike,
            ticks as f32 * SIM_DT,
            view.distance,
            display_distance(view.best)
        ),
    }

    let store = app.shutdown();
    log::info!("Record kept at {}", store.path().display());
    Ok(())
}

fn seed_from_env() -> anyhow::Result<u64> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV, raw)),
        Err(_) => {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0);
            Ok(nanos)
        }
    }
}
