//! Frame snapshot for the rendering side
//!
//! The simulation never draws. Each tick the frontend gets a [`FrameView`]:
//! plain numbers, colors and strings it can turn into pixels however it likes.

use glam::Vec2;
use serde::Serialize;

use crate::Color;
use crate::consts::BOOST_BAR_WIDTH;
use crate::display_distance;
use crate::sim::{GamePhase, GameState};

pub const MENU_TITLE: &str = "GARAGE: SELECT RIDE & THEME";
pub const WIPEOUT_BANNER: &str = "WIPEOUT! Press R for Garage";

/// One garage card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuCard {
    pub key: char,
    pub name: String,
    pub color: Color,
    pub prompt: String,
}

/// Garage screen contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView {
    pub title: &'static str,
    pub theme_line: String,
    pub card_color: Color,
    pub cards: Vec<MenuCard>,
}

/// A rain streak from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Streak {
    pub start: Vec2,
    pub end: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub background: Color,
    pub text_color: Color,
    /// Degrees, positive leans forward
    pub angle: f32,
    pub anchor: Vec2,
    pub vehicle_color: Option<Color>,
    pub boost_fraction: f32,
    /// Filled width of the boost bar (pixels)
    pub boost_bar: f32,
    pub boost_bar_color: Color,
    pub boosting: bool,
    pub score: u64,
    pub best: u64,
    pub distance: u64,
    pub best_distance: u64,
    pub wind: f32,
    pub rain_color: Color,
    pub rain: Vec<Streak>,
    /// Distance readout while riding
    pub hud: Option<String>,
    /// Game-over overlay text
    pub banner: Option<&'static str>,
    pub banner_color: Color,
    pub menu: Option<MenuView>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let theme = state.theme;
        let boost_fraction = state.vehicle.boost_fraction();
        let in_ride = state.phase != GamePhase::Menu;

        let rain = if in_ride {
            state
                .rain
                .streaks(state.wind.force)
                .map(|(start, end)| Streak { start, end })
                .collect()
        } else {
            Vec::new()
        };

        let menu = (state.phase == GamePhase::Menu).then(|| MenuView {
            title: MENU_TITLE,
            theme_line: theme_line(state),
            card_color: theme.card(),
            cards: state
                .garage
                .iter()
                .enumerate()
                .filter_map(|(slot, profile)| {
                    let key = char::from_digit(slot as u32 + 1, 10)?;
                    Some(MenuCard {
                        key,
                        name: profile.name().to_string(),
                        color: profile.color(),
                        prompt: format!("START [{}]", key),
                    })
                })
                .collect(),
        });

        Self {
            phase: state.phase,
            background: theme.background(),
            text_color: theme.text(),
            angle: state.vehicle.angle,
            anchor: state.vehicle.anchor,
            vehicle_color: state.profile().map(|p| p.color()),
            boost_fraction,
            boost_bar: boost_fraction * BOOST_BAR_WIDTH,
            boost_bar_color: Color::NITRO,
            boosting: state.boosting,
            score: state.session.score,
            best: state.session.best,
            distance: state.session.distance(),
            best_distance: display_distance(state.session.best),
            wind: state.wind.force,
            rain_color: theme.rain(),
            rain,
            hud: in_ride.then(|| format!("DIST: {}m", state.session.distance())),
            banner: (state.phase == GamePhase::GameOver).then_some(WIPEOUT_BANNER),
            banner_color: Color::RED,
            menu,
        }
    }
}

fn theme_line(state: &GameState) -> String {
    let options = crate::settings::Theme::ALL
        .iter()
        .map(|t| {
            let label = t.as_str();
            let mut name = label[..1].to_string();
            name.push_str(&label[1..].to_lowercase());
            format!("[{}] {}", t.key(), name)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Theme: {} (Press {})", state.theme.as_str(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;
    use crate::sim::{ScriptedGusts, TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_menu_view() {
        let state = GameState::new(1, Tuning::standard()).with_theme(Theme::White);
        let view = FrameView::capture(&state);
        let menu = view.menu.expect("garage view");
        assert_eq!(menu.title, MENU_TITLE);
        assert_eq!(
            menu.theme_line,
            "Theme: WHITE (Press [K] Black, [L] White, [G] Green)"
        );
        assert_eq!(menu.cards.len(), 3);
        assert_eq!(menu.cards[0].prompt, "START [1]");
        assert_eq!(menu.cards[2].name, "Heavy Beast");
        assert!(view.hud.is_none());
        assert!(view.banner.is_none());
        assert_eq!(view.background, Theme::White.background());
    }

    #[test]
    fn test_ride_and_wipeout_views() {
        let mut state = GameState::new(1, Tuning::standard()).with_best(250);
        let mut gusts = ScriptedGusts::calm();
        let select = TickInput {
            select_vehicle: Some(0),
            ..Default::default()
        };
        tick(&mut state, &select, &mut gusts);
        state.session.score = 129;
        state.vehicle.boost = 50.0;

        let view = FrameView::capture(&state);
        assert!(view.menu.is_none());
        assert_eq!(view.hud.as_deref(), Some("DIST: 12m"));
        assert_eq!(view.best_distance, 25);
        assert_eq!(view.boost_bar, 75.0);
        assert_eq!(view.boost_bar_color, Color::NITRO);
        assert_eq!(view.vehicle_color, Some(state.garage[0].color()));

        state.vehicle.angle = 120.0;
        tick(&mut state, &TickInput::default(), &mut gusts);
        let view = FrameView::capture(&state);
        assert_eq!(view.phase, GamePhase::GameOver);
        assert_eq!(view.banner, Some(WIPEOUT_BANNER));
        assert_eq!(view.banner_color, Color::RED);
        assert!(view.angle > 90.0);
    }

    #[test]
    fn test_view_serializes() {
        let state = GameState::new(1, Tuning::standard());
        let json = serde_json::to_string(&FrameView::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
