//! Autonomous enemy units: formation layout and countdown-driven fire.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::explosion::Dead;
use crate::gameplay::projectile::spawn_bullet;
use crate::gameplay::ship::{Ship, spawn_ship};
use crate::gameplay::{ARENA_HALF, ARENA_WIDTH, Side, Team};
use crate::{GameSet, GameState, gameplay_running};

// === Constants ===

/// Lives per enemy. One hit detonates them regardless; the field exists so
/// enemies satisfy the same unit contract as players.
pub const ENEMY_LIVES: i32 = 1;

/// Fire counter value at which an enemy shoots.
pub const FIRE_THRESHOLD: u32 = 2000;

/// After shooting, the counter restarts at `random_range(0..FIRE_RESET_RANGE)`.
pub const FIRE_RESET_RANGE: u32 = 1500;

/// Clear space kept on each flank of the formation.
const FORMATION_MARGIN: f32 = 300.0;

/// Column spacing within a formation row.
const FORMATION_SPACING_X: f32 = 100.0;

/// Row spacing.
const FORMATION_SPACING_Y: f32 = 90.0;

/// Distance from the arena top to the first formation row.
const FORMATION_TOP: f32 = 50.0;

// === Components ===

/// Per-enemy fire countdown, advanced once per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct FireCounter(pub u32);

// === Pure Layout ===

/// Number of enemies in a fresh wave: three per formation column that fits
/// between the flank margins.
#[must_use]
pub fn wave_size() -> usize {
    let columns = ((ARENA_WIDTH - 2.0 * FORMATION_MARGIN) / FORMATION_SPACING_X).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = columns as usize;
    columns * 3
}

/// Walk the formation grid: left to right from the top row, wrapping into a
/// new row when a column would cross the right flank margin.
#[must_use]
pub fn formation_positions(count: usize) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity(count);
    let mut x = FORMATION_MARGIN;
    let mut y = FORMATION_TOP;

    for _ in 0..count {
        positions.push(Vec2::new(x - ARENA_HALF.x, ARENA_HALF.y - y));

        x += FORMATION_SPACING_X;
        if x > ARENA_WIDTH - FORMATION_MARGIN {
            x = FORMATION_MARGIN;
            y += FORMATION_SPACING_Y;
        }
    }

    positions
}

// === Systems ===

/// Spawn the enemy wave for a new match, fire counters staggered at random
/// so the formation never volleys in sync.
fn spawn_enemy_wave(mut commands: Commands) {
    let count = wave_size();
    info!("spawning enemy wave of {count}");

    let mut rng = rand::rng();
    for position in formation_positions(count) {
        let enemy = spawn_ship(&mut commands, Team::Enemy, position, ENEMY_LIVES);
        commands
            .entity(enemy)
            .insert(FireCounter(rng.random_range(0..FIRE_THRESHOLD)));
    }
}

/// Advance every enemy's fire counter; at the threshold, shoot downward and
/// restart the countdown at a random phase.
/// Runs in `GameSet::Fire`.
fn enemy_fire(
    mut commands: Commands,
    mut enemies: Query<(&Transform, &mut FireCounter), (With<Ship>, Without<Dead>)>,
) {
    let mut rng = rand::rng();

    for (transform, mut counter) in &mut enemies {
        counter.0 += 1;

        if counter.0 >= FIRE_THRESHOLD {
            counter.0 = rng.random_range(0..FIRE_RESET_RANGE);
            spawn_bullet(
                &mut commands,
                transform.translation.truncate(),
                Side::Enemies,
            );
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<FireCounter>();

    app.add_systems(OnEnter(GameState::InGame), spawn_enemy_wave);

    app.add_systems(
        Update,
        enemy_fire.in_set(GameSet::Fire).run_if(gameplay_running),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gameplay::projectile::Bullet;
    use crate::testing::{assert_entity_count, spawn_test_ship};

    fn create_fire_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, enemy_fire);
        app
    }

    fn spawn_test_enemy(world: &mut World, counter: u32) -> Entity {
        let enemy = spawn_test_ship(world, Team::Enemy, Vec2::new(0.0, 200.0), ENEMY_LIVES);
        world.entity_mut(enemy).insert(FireCounter(counter));
        enemy
    }

    #[test]
    fn enemy_fires_when_counter_reaches_threshold() {
        let mut app = create_fire_test_app();
        let enemy = spawn_test_enemy(app.world_mut(), FIRE_THRESHOLD - 1);

        app.update();

        assert_entity_count::<With<Bullet>>(&mut app, 1);

        // Counter restarted below the reset range.
        let counter = app.world().get::<FireCounter>(enemy).unwrap();
        assert!(counter.0 < FIRE_RESET_RANGE);
    }

    #[test]
    fn enemy_holds_fire_below_threshold() {
        let mut app = create_fire_test_app();
        spawn_test_enemy(app.world_mut(), 0);

        for _ in 0..5 {
            app.update();
        }

        assert_entity_count::<With<Bullet>>(&mut app, 0);
    }

    #[test]
    fn dead_enemies_do_not_fire() {
        let mut app = create_fire_test_app();
        let enemy = spawn_test_enemy(app.world_mut(), FIRE_THRESHOLD - 1);
        app.world_mut().entity_mut(enemy).insert(Dead);

        app.update();

        assert_entity_count::<With<Bullet>>(&mut app, 0);
    }

    #[test]
    fn enemy_bullets_fly_downward() {
        let mut app = create_fire_test_app();
        spawn_test_enemy(app.world_mut(), FIRE_THRESHOLD - 1);

        app.update();

        let mut bullets = app
            .world_mut()
            .query::<(&Bullet, &crate::gameplay::Velocity, &Transform)>();
        let (bullet, velocity, transform) = bullets.single(app.world()).unwrap();
        assert!(matches!(bullet.side, Side::Enemies));
        assert!(velocity.0.y < 0.0);
        // Spawned one muzzle length below the enemy.
        assert!(transform.translation.y < 200.0);
    }
}
