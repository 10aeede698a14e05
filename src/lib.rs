//! Star Assault game library.
//!
//! A two-player wave shooter: two ships against a formation of autonomous
//! raiders, fought with edge-triggered cannons and tracked via lives and
//! score until one side runs out.

pub mod gameplay;
pub mod menus;
pub mod screens;
pub mod theme;

#[cfg(feature = "dev")]
mod dev_tools;
#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

use crate::gameplay::outcome::Outcome;
use crate::menus::Menu;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// Main menu state.
    MainMenu,
    /// Active gameplay state.
    InGame,
}

/// Per-frame simulation phases, chained in `Update`.
///
/// Each set fully completes before the next starts, giving the fixed
/// input → simulate → fire → outcome → cleanup → render frame sequence.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Key sampling, thrust, and fire edge detection.
    Input,
    /// Ship drift/integration, arena clamping, explosion advance, starfield.
    Movement,
    /// Bullet integration, homing, collision and bounds removal.
    Combat,
    /// Autonomous enemy fire counters.
    Fire,
    /// Win/lose detection.
    Outcome,
    /// Lives-exhausted explosions and dead-enemy removal.
    Cleanup,
    /// HUD and visual sync.
    Ui,
}

// === Z Layers ===

/// Z coordinate for background stars.
pub const Z_STAR: f32 = 1.0;

/// Z coordinate for ships.
pub const Z_SHIP: f32 = 2.0;

/// Z coordinate for bullets (in front of ships).
pub const Z_BULLET: f32 = 3.0;

/// Run condition for battle simulation systems: in a match, no menu overlay
/// open, and the match still undecided.
pub fn gameplay_running(
    game_state: Option<Res<State<GameState>>>,
    menu: Option<Res<State<Menu>>>,
    outcome: Option<Res<State<Outcome>>>,
) -> bool {
    game_state.is_some_and(|s| *s.get() == GameState::InGame)
        && menu.is_some_and(|m| *m.get() == Menu::None)
        && outcome.is_some_and(|o| *o.get() == Outcome::Ongoing)
}

/// Root plugin: states, phase ordering, camera, and all domain plugins.
pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_sub_state::<Outcome>();

    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Combat,
            GameSet::Fire,
            GameSet::Outcome,
            GameSet::Cleanup,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_systems(Startup, setup_camera);

    app.add_plugins((gameplay::plugin, menus::plugin, screens::plugin));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}

/// Spawns the global 2D camera. Persists across all states (do NOT add `DespawnOnExit`).
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
