//! Decorative scrolling starfield behind the battle.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::{ARENA_HALF, Velocity};
use crate::menus::Menu;
use crate::theme::palette;
use crate::{GameSet, GameState, Z_STAR};

/// Stars spawned per match.
pub const STAR_COUNT: usize = 20;

/// Star sprite extent.
const STAR_SIZE: Vec2 = Vec2::new(3.0, 3.0);

/// Fall speed range, pixels per second.
const MIN_FALL_SPEED: f32 = 50.0;
const MAX_FALL_SPEED: f32 = 150.0;

/// Marker for background stars.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Star;

/// Scatter the starfield across the arena with randomized fall speeds.
fn spawn_starfield(mut commands: Commands) {
    let mut rng = rand::rng();

    for _ in 0..STAR_COUNT {
        let x = rng.random_range(-ARENA_HALF.x..ARENA_HALF.x);
        let y = rng.random_range(-ARENA_HALF.y..ARENA_HALF.y);
        let fall_speed = rng.random_range(MIN_FALL_SPEED..MAX_FALL_SPEED);

        commands.spawn((
            Name::new("Star"),
            Star,
            Velocity(Vec2::new(0.0, -fall_speed)),
            Sprite::from_color(palette::STAR, STAR_SIZE),
            Transform::from_xyz(x, y, Z_STAR),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Scroll stars downward, wrapping each one back to the top edge when it
/// leaves through the bottom. Keeps running on the win/lose screens.
fn scroll_starfield(
    time: Res<Time>,
    mut stars: Query<(&mut Transform, &Velocity), With<Star>>,
) {
    let dt = time.delta_secs();

    for (mut transform, velocity) in &mut stars {
        if transform.translation.y <= -ARENA_HALF.y {
            transform.translation.y = ARENA_HALF.y;
        }

        transform.translation.y = velocity.0.y.mul_add(dt, transform.translation.y);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Star>();

    app.add_systems(OnEnter(GameState::InGame), spawn_starfield);

    // Not gated on the match outcome: the sky keeps moving behind the
    // victory and defeat screens.
    app.add_systems(
        Update,
        scroll_starfield
            .in_set(GameSet::Movement)
            .run_if(in_state(GameState::InGame).and(in_state(Menu::None))),
    );
}
