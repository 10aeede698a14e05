//! Tests for game state transitions.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use pretty_assertions::assert_eq;
use star_assault::GameState;
use star_assault::menus::Menu;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    app.add_plugins(star_assault::plugin);
    app
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Loading);
}

#[test]
fn loading_hands_off_to_the_main_menu() {
    let mut app = create_game_app();

    // First update runs the loading screen's hand-off, second applies it.
    app.update();
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::MainMenu);
}

#[test]
fn main_menu_screen_opens_the_menu_overlay() {
    let mut app = create_game_app();

    app.update();
    app.update();
    app.update();

    let menu = app.world().resource::<State<Menu>>();
    assert_eq!(*menu.get(), Menu::Main);
}

#[test]
fn quitting_a_match_returns_to_the_main_menu() {
    let mut app = create_game_app();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::MainMenu);
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::MainMenu);
}
