//! Ship archetype and arcade flight physics, shared by player and enemy units.

use bevy::prelude::*;

use crate::gameplay::explosion::Dead;
use crate::gameplay::{ARENA_HALF, Lives, Team, Velocity};
use crate::theme::palette;
use crate::{GameSet, GameState, Z_SHIP, gameplay_running};

// === Constants ===

/// Ship sprite extent. Doubles as the collision box for bullet hits.
pub const SHIP_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Lateral thrust per input frame.
pub const ACCELERATION: f32 = 10.0;

/// Thrust per input frame along the flight axis; the hull answers slower
/// fore-and-aft than sideways.
pub const VERTICAL_ACCELERATION: f32 = ACCELERATION / 2.0;

/// Counter-thrust applied when input opposes the current velocity sign.
pub const BRAKE: f32 = 5.0 * ACCELERATION;

/// Per-axis speed cap, pixels per second.
pub const TOP_SPEED: f32 = 750.0;

/// Passive per-frame velocity decay toward zero, per axis.
pub const DRAG: f32 = 1.0;

/// Speed above which a stopped ship counts as moving.
const MOVING_THRESHOLD: f32 = 35.0;

/// Speed below which a moving ship counts as stopped again.
const STOPPED_THRESHOLD: f32 = 25.0;

// === Components ===

/// Marker for ship entities (player or enemy units).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Ship;

/// Hysteresis over ship speed. Feeds the engine-glow tint.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum SpeedState {
    #[default]
    Stopped,
    Moving,
}

/// Additive set of thrust directions for one input frame. Diagonals are the
/// union of two flags, not a normalized heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionMask(u8);

impl DirectionMask {
    pub const FORWARD: Self = Self(1);
    pub const BACKWARD: Self = Self(1 << 1);
    pub const LEFT: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);

    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }
}

impl std::ops::BitOr for DirectionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for DirectionMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// === Spawning ===

/// Spawn a ship with all shared components. Controlled ships get their input
/// components from the caller; autonomous ships get a fire counter.
pub fn spawn_ship(commands: &mut Commands, team: Team, position: Vec2, lives: i32) -> Entity {
    let color = match team {
        Team::Player1 => palette::PLAYER_ONE_SHIP,
        Team::Player2 => palette::PLAYER_TWO_SHIP,
        Team::Enemy => palette::ENEMY_SHIP,
    };

    commands
        .spawn((
            Name::new(format!("{team:?} Ship")),
            Ship,
            team,
            Lives(lives),
            Velocity::default(),
            SpeedState::default(),
            Sprite::from_color(color, SHIP_SIZE),
            Transform::from_xyz(position.x, position.y, Z_SHIP),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

// === Pure Physics ===

/// Apply one input frame of thrust. Input against the current velocity sign
/// brakes hard; with the sign it accelerates, capped at `TOP_SPEED`.
pub fn apply_thrust(velocity: &mut Vec2, direction: DirectionMask) {
    if direction.contains(DirectionMask::FORWARD) {
        if velocity.y < 0.0 {
            velocity.y += BRAKE;
        } else if velocity.y <= TOP_SPEED {
            velocity.y += VERTICAL_ACCELERATION;
        }
    }

    if direction.contains(DirectionMask::BACKWARD) {
        if velocity.y > 0.0 {
            velocity.y -= BRAKE;
        } else if velocity.y >= -TOP_SPEED {
            velocity.y -= VERTICAL_ACCELERATION;
        }
    }

    if direction.contains(DirectionMask::LEFT) {
        if velocity.x > 0.0 {
            velocity.x -= BRAKE;
        } else if velocity.x >= -TOP_SPEED {
            velocity.x -= ACCELERATION;
        }
    }

    if direction.contains(DirectionMask::RIGHT) {
        if velocity.x < 0.0 {
            velocity.x += BRAKE;
        } else if velocity.x <= TOP_SPEED {
            velocity.x += ACCELERATION;
        }
    }
}

/// Move a scalar one `step` toward zero without crossing it.
fn toward_zero(value: f32, step: f32) -> f32 {
    if value > 0.0 {
        (value - step).max(0.0)
    } else {
        (value + step).min(0.0)
    }
}

/// Passive per-frame slowdown on each axis independently.
pub fn drift(velocity: &mut Vec2) {
    velocity.x = toward_zero(velocity.x, DRAG);
    velocity.y = toward_zero(velocity.y, DRAG);
}

/// Reflect `position` off each arena edge independently so the ship's box
/// stays fully inside. Velocity is left untouched.
pub fn clamp_to_arena(position: &mut Vec2) {
    let half = SHIP_SIZE / 2.0;

    if position.x + half.x >= ARENA_HALF.x {
        position.x = ARENA_HALF.x - half.x;
    }
    if position.x - half.x <= -ARENA_HALF.x {
        position.x = -ARENA_HALF.x + half.x;
    }
    if position.y + half.y >= ARENA_HALF.y {
        position.y = ARENA_HALF.y - half.y;
    }
    if position.y - half.y <= -ARENA_HALF.y {
        position.y = -ARENA_HALF.y + half.y;
    }
}

/// Advance the speed-state hysteresis for the given speed.
#[must_use]
pub fn next_speed_state(state: SpeedState, speed: f32) -> SpeedState {
    match state {
        SpeedState::Stopped if speed > MOVING_THRESHOLD => SpeedState::Moving,
        SpeedState::Moving if speed < STOPPED_THRESHOLD => SpeedState::Stopped,
        other => other,
    }
}

// === Systems ===

/// Drift, integrate, clamp, and track the speed state for every living ship.
/// Runs in `GameSet::Movement`.
fn ship_physics(
    time: Res<Time>,
    mut ships: Query<(&mut Transform, &mut Velocity, &mut SpeedState), (With<Ship>, Without<Dead>)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut velocity, mut speed_state) in &mut ships {
        drift(&mut velocity.0);

        transform.translation.x = velocity.0.x.mul_add(dt, transform.translation.x);
        transform.translation.y = velocity.0.y.mul_add(dt, transform.translation.y);

        let mut position = transform.translation.truncate();
        clamp_to_arena(&mut position);
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        let next = next_speed_state(*speed_state, velocity.0.length());
        if next != *speed_state {
            *speed_state = next;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Ship>().register_type::<SpeedState>();

    app.add_systems(
        Update,
        ship_physics
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );
}
