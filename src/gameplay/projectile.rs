//! Bullets: spawning, flight, enemy homing, and collision resolution.

use bevy::prelude::*;

use crate::gameplay::explosion::{Dead, Exploding, trigger_explosion};
use crate::gameplay::ship::{SHIP_SIZE, Ship};
use crate::gameplay::{ARENA_HALF, Lives, Side, Team, Velocity};
use crate::theme::palette;
use crate::{GameSet, GameState, Z_BULLET, gameplay_running};

// === Constants ===

/// Player bullet speed, straight up (pixels per second).
pub const PLAYER_BULLET_SPEED: f32 = 800.0;

/// Enemy bullet speed, straight down (pixels per second).
pub const ENEMY_BULLET_SPEED: f32 = 200.0;

/// Distance from the owner's center to the bullet spawn point, along travel.
pub const MUZZLE_OFFSET: f32 = 75.0;

/// Horizontal velocity nudge applied per frame while an enemy bullet homes
/// on a player. Small on purpose: shots curve, they do not teleport.
pub const HOMING_STEP: f32 = 2.0;

/// Bullet sprite extent.
pub const BULLET_SIZE: Vec2 = Vec2::new(6.0, 18.0);

// === Components ===

/// A bullet in flight, tagged with the side that fired it. It may only
/// damage units on the other side.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Bullet {
    pub side: Side,
}

// === Spawning ===

/// Spawn a bullet for `side` from `origin`, offset one muzzle length along
/// its direction of travel.
pub fn spawn_bullet(commands: &mut Commands, origin: Vec2, side: Side) {
    let (velocity, offset, color) = match side {
        Side::Players => (
            Vec2::new(0.0, PLAYER_BULLET_SPEED),
            MUZZLE_OFFSET,
            palette::PLAYER_BULLET,
        ),
        Side::Enemies => (
            Vec2::new(0.0, -ENEMY_BULLET_SPEED),
            -MUZZLE_OFFSET,
            palette::ENEMY_BULLET,
        ),
    };

    commands.spawn((
        Name::new("Bullet"),
        Bullet { side },
        Velocity(velocity),
        Sprite::from_color(color, BULLET_SIZE),
        Transform::from_xyz(origin.x, origin.y + offset, Z_BULLET),
        DespawnOnExit(GameState::InGame),
    ));
}

// === Pure Hit Tests ===

/// Point-in-box test against an axis-aligned box centered at `center` with
/// the given full `size`. Closed intervals: the boundary counts as inside.
#[must_use]
pub fn point_in_box(point: Vec2, center: Vec2, size: Vec2) -> bool {
    let half = size / 2.0;
    point.x >= center.x - half.x
        && point.x <= center.x + half.x
        && point.y >= center.y - half.y
        && point.y <= center.y + half.y
}

/// Horizontal steering for a homing bullet: one fixed step toward the target.
#[must_use]
pub fn homing_nudge(bullet_x: f32, target_x: f32) -> f32 {
    if bullet_x > target_x {
        -HOMING_STEP
    } else {
        HOMING_STEP
    }
}

/// Past the top or bottom arena edge, boundary inclusive.
#[must_use]
pub fn outside_vertical_bounds(y: f32) -> bool {
    y >= ARENA_HALF.y || y <= -ARENA_HALF.y
}

// === Systems ===

/// Integrate bullet positions.
/// Runs first in `GameSet::Combat`.
fn move_bullets(time: Res<Time>, mut bullets: Query<(&mut Transform, &Velocity), With<Bullet>>) {
    let dt = time.delta_secs();

    for (mut transform, velocity) in &mut bullets {
        transform.translation.x = velocity.0.x.mul_add(dt, transform.translation.x);
        transform.translation.y = velocity.0.y.mul_add(dt, transform.translation.y);
    }
}

/// Curve enemy bullets toward the nearer living player. With one player
/// down the survivor is tracked; with both down the bullet flies straight.
fn home_enemy_bullets(
    mut bullets: Query<(&Transform, &mut Velocity, &Bullet)>,
    players: Query<(&Transform, &Team), (With<Ship>, Without<Dead>, Without<Bullet>)>,
) {
    for (bullet_transform, mut velocity, bullet) in &mut bullets {
        if bullet.side != Side::Enemies {
            continue;
        }

        let position = bullet_transform.translation.truncate();
        let target = players
            .iter()
            .filter(|(_, team)| team.side() == Side::Players)
            .map(|(transform, _)| transform.translation.truncate())
            .min_by(|a, b| position.distance(*a).total_cmp(&position.distance(*b)));

        if let Some(target) = target {
            velocity.0.x += homing_nudge(position.x, target.x);
        }
    }
}

/// Resolve every bullet against opposing units, then the vertical bounds.
///
/// Check order per bullet: Player1, Player2 (enemy fire only), then living
/// enemies (player fire only). The first match wins, so a bullet damages at
/// most one unit per frame even when boxes overlap, and each bullet is
/// removed at most once.
fn resolve_bullets(
    mut commands: Commands,
    bullets: Query<(Entity, &Transform, &Bullet)>,
    mut ships: Query<
        (Entity, &Transform, &Team, &mut Lives, &mut Velocity, Option<&Exploding>),
        (With<Ship>, Without<Dead>),
    >,
) {
    for (bullet_entity, bullet_transform, bullet) in &bullets {
        let point = bullet_transform.translation.truncate();
        let mut hit = false;

        match bullet.side {
            Side::Enemies => {
                for slot in [Team::Player1, Team::Player2] {
                    let player = ships
                        .iter_mut()
                        .find(|(_, _, team, ..)| **team == slot);
                    let Some((_, transform, _, mut lives, _, _)) = player else {
                        continue;
                    };

                    if point_in_box(point, transform.translation.truncate(), SHIP_SIZE) {
                        lives.take_damage();
                        hit = true;
                        break;
                    }
                }
            }
            Side::Players => {
                for (enemy, transform, team, _, mut velocity, exploding) in &mut ships {
                    if *team != Team::Enemy {
                        continue;
                    }

                    if point_in_box(point, transform.translation.truncate(), SHIP_SIZE) {
                        // A detonating enemy still absorbs the shot, but its
                        // animation is never restarted.
                        if exploding.is_none() {
                            trigger_explosion(&mut commands, enemy, &mut *velocity);
                        }
                        hit = true;
                        break;
                    }
                }
            }
        }

        if hit || outside_vertical_bounds(point.y) {
            commands.entity(bullet_entity).despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Bullet>();

    app.add_systems(
        Update,
        (move_bullets, home_enemy_bullets, resolve_bullets)
            .chain()
            .in_set(GameSet::Combat)
            .run_if(gameplay_running),
    );
}
