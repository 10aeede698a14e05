//! Testing utilities for Bevy systems.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::GameState;
use crate::gameplay::outcome::Outcome;
use crate::gameplay::ship::{SHIP_SIZE, Ship, SpeedState};
use crate::gameplay::{Lives, Score, Team, Velocity};
use crate::menus::Menu;

/// Creates a minimal app for testing with essential plugins.
#[allow(dead_code)]
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Creates a test app with the game's state machinery and input resources,
/// but none of the gameplay systems.
pub fn create_base_test_app() -> App {
    let mut app = create_test_app();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app.add_sub_state::<Outcome>();
    app.init_resource::<Score>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app
}

/// Transition the app into a running match and apply the state change.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Helper to advance the app by one frame.
#[allow(dead_code)]
pub fn tick(app: &mut App) {
    app.update();
}

/// Helper to advance the app by multiple frames.
#[allow(dead_code)]
pub fn tick_multiple(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

/// Assert how many entities match the given query filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let count = app
        .world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count();
    assert_eq!(
        count,
        expected,
        "expected {expected} entities matching filter, found {count}"
    );
}

/// Spawn a bare ship directly into the world, without the state-scoped
/// despawn marker so it works in stateless test apps.
pub fn spawn_test_ship(world: &mut World, team: Team, position: Vec2, lives: i32) -> Entity {
    world
        .spawn((
            Ship,
            team,
            Lives(lives),
            Velocity::default(),
            SpeedState::default(),
            Sprite::from_color(Color::WHITE, SHIP_SIZE),
            Transform::from_xyz(position.x, position.y, 0.0),
        ))
        .id()
}
