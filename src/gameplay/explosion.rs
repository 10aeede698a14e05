//! Explosion state machine: a unit that runs out of lives (or is shot, for
//! enemies) detonates, plays a fixed-length animation, and only then counts
//! as dead.

use bevy::prelude::*;

use crate::gameplay::ship::{SHIP_SIZE, Ship, SpeedState};
use crate::gameplay::{Team, Velocity};
use crate::theme::palette;
use crate::{GameSet, gameplay_running};

/// Total animation frames before an exploding unit becomes dead.
pub const EXPLOSION_FRAMES: u32 = 16;

// === Components ===

/// A running explosion. Present only while the animation plays; removal plus
/// a `Dead` insert marks completion.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Exploding {
    pub frame: u32,
}

/// Permanently destroyed. Dead units take no input, never move, never
/// collide, and are hidden.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Dead;

// === Triggering ===

/// Detonate a unit: zero its velocity and start the animation at frame 0.
///
/// Callers are responsible for idempotence: skip units that already carry
/// `Exploding` or `Dead` so a running animation is never restarted.
pub fn trigger_explosion(commands: &mut Commands, entity: Entity, velocity: &mut Velocity) {
    velocity.0 = Vec2::ZERO;
    commands.entity(entity).insert(Exploding::default());
}

// === Systems ===

/// Advance every running explosion by one frame; at `EXPLOSION_FRAMES` the
/// unit leaves the animation and becomes dead.
/// Runs in `GameSet::Movement`.
pub(crate) fn advance_explosions(
    mut commands: Commands,
    mut units: Query<(Entity, &mut Exploding)>,
) {
    for (entity, mut exploding) in &mut units {
        exploding.frame += 1;

        if exploding.frame >= EXPLOSION_FRAMES {
            commands
                .entity(entity)
                .remove::<Exploding>()
                .insert((Dead, Visibility::Hidden));
        }
    }
}

// === Visuals ===

/// Fireball tint for an animation frame: white-hot at ignition, fading to a
/// dim ember by the last frame.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn explosion_color(frame: u32) -> Color {
    let t = frame as f32 / EXPLOSION_FRAMES as f32;
    Color::srgba(1.0, (1.0 - t).mul_add(0.8, 0.2), 0.1, 1.0 - t * 0.9)
}

/// Fireball extent for an animation frame: grows to twice the hull size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn explosion_size(frame: u32) -> Vec2 {
    let t = frame as f32 / EXPLOSION_FRAMES as f32;
    SHIP_SIZE * (1.0 + t)
}

/// Hull tint for a living ship; moving ships get an engine-glow lift.
#[must_use]
pub fn ship_color(team: Team, speed_state: SpeedState) -> Color {
    let base = match team {
        Team::Player1 => palette::PLAYER_ONE_SHIP,
        Team::Player2 => palette::PLAYER_TWO_SHIP,
        Team::Enemy => palette::ENEMY_SHIP,
    };

    match speed_state {
        SpeedState::Stopped => base,
        SpeedState::Moving => base.mix(&Color::WHITE, 0.25),
    }
}

/// Repaint ship sprites from their simulation state: explosion fireball
/// while detonating, team hull color (plus engine glow) otherwise.
/// Runs in `GameSet::Ui`.
fn sync_ship_visuals(
    mut ships: Query<
        (&Team, &SpeedState, Option<&Exploding>, &mut Sprite),
        (With<Ship>, Without<Dead>),
    >,
) {
    for (team, speed_state, exploding, mut sprite) in &mut ships {
        if let Some(exploding) = exploding {
            sprite.color = explosion_color(exploding.frame);
            sprite.custom_size = Some(explosion_size(exploding.frame));
        } else {
            sprite.color = ship_color(*team, *speed_state);
            sprite.custom_size = Some(SHIP_SIZE);
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Exploding>().register_type::<Dead>();

    app.add_systems(
        Update,
        advance_explosions
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );

    app.add_systems(
        Update,
        sync_ship_visuals
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
