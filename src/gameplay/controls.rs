//! Player ships: key bindings, thrust input, and edge-triggered cannons.

use bevy::prelude::*;

use crate::gameplay::explosion::Dead;
use crate::gameplay::projectile::spawn_bullet;
use crate::gameplay::ship::{DirectionMask, Ship, apply_thrust, spawn_ship};
use crate::gameplay::{ARENA_HEIGHT, ARENA_WIDTH, Side, Team, Velocity};
use crate::{GameSet, GameState, gameplay_running};

// === Constants ===

/// Lives each player starts a match with.
pub const PLAYER_LIVES: i32 = 3;

/// Player 1 start position: left third of the arena, lower third.
pub const PLAYER_ONE_START: Vec2 = Vec2::new(-ARENA_WIDTH / 6.0, -ARENA_HEIGHT / 6.0);

/// Player 2 start position, mirrored.
pub const PLAYER_TWO_START: Vec2 = Vec2::new(ARENA_WIDTH / 6.0, -ARENA_HEIGHT / 6.0);

// === Components ===

/// Key bindings for one controlled ship.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ShipControls {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub fire: KeyCode,
}

impl ShipControls {
    /// Player 1: WASD plus space.
    #[must_use]
    pub const fn wasd() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            fire: KeyCode::Space,
        }
    }

    /// Player 2: numpad 8/5/4/6 plus numpad 0.
    #[must_use]
    pub const fn numpad() -> Self {
        Self {
            forward: KeyCode::Numpad8,
            backward: KeyCode::Numpad5,
            left: KeyCode::Numpad4,
            right: KeyCode::Numpad6,
            fire: KeyCode::Numpad0,
        }
    }
}

/// Per-ship fire-key edge state. One shot leaves the cannon when the key is
/// released after a hold, never a stream while held.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct FireControl {
    pub held: bool,
}

// === Pure Input ===

/// Build the thrust mask for one ship from the sampled key state.
#[must_use]
pub fn direction_from_keys(
    keyboard: &ButtonInput<KeyCode>,
    controls: &ShipControls,
) -> DirectionMask {
    let mut direction = DirectionMask::default();

    if keyboard.pressed(controls.forward) {
        direction |= DirectionMask::FORWARD;
    }
    if keyboard.pressed(controls.backward) {
        direction |= DirectionMask::BACKWARD;
    }
    if keyboard.pressed(controls.left) {
        direction |= DirectionMask::LEFT;
    }
    if keyboard.pressed(controls.right) {
        direction |= DirectionMask::RIGHT;
    }

    direction
}

// === Systems ===

/// Spawn both player ships at their match start positions.
fn spawn_players(mut commands: Commands) {
    let player_one = spawn_ship(&mut commands, Team::Player1, PLAYER_ONE_START, PLAYER_LIVES);
    commands
        .entity(player_one)
        .insert((ShipControls::wasd(), FireControl::default()));

    let player_two = spawn_ship(&mut commands, Team::Player2, PLAYER_TWO_START, PLAYER_LIVES);
    commands
        .entity(player_two)
        .insert((ShipControls::numpad(), FireControl::default()));
}

/// Sample keys for every living controlled ship: thrust from the direction
/// mask and fire-edge tracking. A release after a hold spawns one bullet.
/// Runs in `GameSet::Input`.
fn read_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut ships: Query<
        (&ShipControls, &mut FireControl, &mut Velocity, &Transform),
        (With<Ship>, Without<Dead>),
    >,
) {
    for (controls, mut fire, mut velocity, transform) in &mut ships {
        apply_thrust(&mut velocity.0, direction_from_keys(&keyboard, controls));

        if keyboard.pressed(controls.fire) {
            fire.held = true;
        } else if fire.held {
            fire.held = false;
            spawn_bullet(
                &mut commands,
                transform.translation.truncate(),
                Side::Players,
            );
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ShipControls>().register_type::<FireControl>();

    app.add_systems(OnEnter(GameState::InGame), spawn_players);

    app.add_systems(
        Update,
        read_controls.in_set(GameSet::Input).run_if(gameplay_running),
    );
}
