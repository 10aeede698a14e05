//! End-to-end match flow: menu to battle, shooting, and both endings.
//!
//! Key state is driven manually (no `InputPlugin`), so each tap is pressed
//! for exactly one frame and then cleared.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use pretty_assertions::assert_eq;
use star_assault::GameState;
use star_assault::gameplay::controls::ShipControls;
use star_assault::gameplay::enemy::FireCounter;
use star_assault::gameplay::explosion::Dead;
use star_assault::gameplay::outcome::Outcome;
use star_assault::gameplay::projectile::Bullet;
use star_assault::gameplay::ship::Ship;
use star_assault::gameplay::starfield::Star;
use star_assault::gameplay::{KILL_SCORE, Lives, Score, Team};
use star_assault::menus::Menu;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(star_assault::plugin);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

/// Release the key and drop the edge flags, as the input plugin would at the
/// next frame boundary.
fn release(app: &mut App, key: KeyCode) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(key);
    keyboard.clear();
}

/// Press for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    press(app, key);
    app.update();
    release(app, key);
}

/// Drive the app from launch into a running match via the main menu.
fn start_match(app: &mut App) {
    // Loading hands off, the main menu opens.
    app.update();
    app.update();
    app.update();
    assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::Main);

    // Confirm the default Start entry.
    tap(app, KeyCode::Enter);
    app.update();

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::InGame
    );
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count()
}

fn collect<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).collect()
}

fn outcome(app: &App) -> Outcome {
    *app.world().resource::<State<Outcome>>().get()
}

#[test]
fn starting_a_match_spawns_the_battlefield() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    assert_eq!(count::<With<ShipControls>>(&mut app), 2);
    assert_eq!(count::<With<FireCounter>>(&mut app), 21);
    assert_eq!(count::<With<Star>>(&mut app), 20);
    assert_eq!(*app.world().resource::<Score>(), Score(0));
    assert_eq!(outcome(&app), Outcome::Ongoing);
}

#[test]
fn released_fire_key_spawns_one_player_bullet() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    // Holding produces nothing.
    press(&mut app, KeyCode::Space);
    app.update();
    app.update();
    assert_eq!(count::<With<Bullet>>(&mut app), 0);

    // The release edge fires exactly one shot.
    release(&mut app, KeyCode::Space);
    app.update();
    app.update();
    assert_eq!(count::<With<Bullet>>(&mut app), 1);
}

#[test]
fn clearing_the_wave_wins_and_pays_the_full_score() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    let enemies = collect::<With<FireCounter>>(&mut app);
    assert_eq!(enemies.len(), 21);

    for enemy in enemies {
        app.world_mut().entity_mut(enemy).insert(Dead);
    }

    // One dead enemy is removed per frame; give the removal queue room,
    // then the win is declared.
    for _ in 0..25 {
        app.update();
    }

    assert_eq!(count::<With<FireCounter>>(&mut app), 0);
    assert_eq!(*app.world().resource::<Score>(), Score(21 * KILL_SCORE));
    assert_eq!(outcome(&app), Outcome::Won);
}

#[test]
fn outcome_stays_won_even_if_players_die_later() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    for enemy in collect::<With<FireCounter>>(&mut app) {
        app.world_mut().entity_mut(enemy).insert(Dead);
    }
    for _ in 0..25 {
        app.update();
    }
    assert_eq!(outcome(&app), Outcome::Won);

    for player in collect::<With<ShipControls>>(&mut app) {
        app.world_mut().entity_mut(player).insert(Dead);
    }
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(outcome(&app), Outcome::Won);
}

#[test]
fn exhausted_players_explode_then_the_match_is_lost() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    let players = collect::<With<ShipControls>>(&mut app);
    for player in &players {
        app.world_mut().get_mut::<Lives>(*player).unwrap().0 = 0;
    }

    // Explosions must fully play out before the defeat lands.
    app.update();
    assert_eq!(outcome(&app), Outcome::Ongoing);

    for _ in 0..25 {
        app.update();
    }

    for player in &players {
        assert!(app.world().get::<Dead>(*player).is_some());
    }
    assert_eq!(outcome(&app), Outcome::Lost);
}

#[test]
fn escape_pauses_and_freezes_the_clock() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    tap(&mut app, KeyCode::Escape);
    app.update();

    assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::Pause);
    assert!(app.world().resource::<Time<Virtual>>().is_paused());
}

#[test]
fn enemies_carry_the_unit_contract() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.update();

    // Every autonomous unit shares the ship archetype with lives and a team.
    let mut query = app
        .world_mut()
        .query_filtered::<(&Team, &Lives), (With<Ship>, With<FireCounter>)>();
    for (team, lives) in query.iter(app.world()) {
        assert_eq!(*team, Team::Enemy);
        assert!(lives.0 > 0);
    }
}
