//! Gameplay domain: ships, controls, enemies, projectiles, starfield,
//! outcome tracking, and the in-match HUD.

pub mod controls;
pub mod enemy;
pub mod explosion;
pub mod hud;
pub mod outcome;
pub mod projectile;
pub mod ship;
pub mod starfield;

use bevy::prelude::*;

use crate::GameState;

// === Arena ===

/// Logical playfield width in pixels (origin-centered, y-up).
pub const ARENA_WIDTH: f32 = 1280.0;

/// Logical playfield height in pixels.
pub const ARENA_HEIGHT: f32 = 720.0;

/// Half-extents of the playfield, for symmetric bounds checks.
pub const ARENA_HALF: Vec2 = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);

// === Teams ===

/// Ownership tag for units. Determines which bullets may damage them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum Team {
    Player1,
    Player2,
    Enemy,
}

impl Team {
    /// The battle side this team fights on.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Player1 | Self::Player2 => Side::Players,
            Self::Enemy => Side::Enemies,
        }
    }
}

/// The two opposing sides. Bullets carry their owner's side and only damage
/// units on the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Side {
    Players,
    Enemies,
}

impl Side {
    #[must_use]
    pub const fn opposes(self, team: Team) -> bool {
        !matches!(
            (self, team),
            (Self::Players, Team::Player1 | Team::Player2) | (Self::Enemies, Team::Enemy)
        )
    }
}

// === Shared Components ===

/// Velocity in pixels per second. Integrated into `Transform` each frame.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Remaining lives. Signed: a unit hit again during the same frame its last
/// life goes can dip below zero for one frame without underflowing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Lives(pub i32);

impl Lives {
    pub const fn take_damage(&mut self) {
        self.0 -= 1;
    }

    #[must_use]
    pub const fn exhausted(self) -> bool {
        self.0 <= 0
    }
}

// === Score ===

/// Points awarded per destroyed enemy.
pub const KILL_SCORE: u32 = 10;

/// Match score. Reset when a new match starts.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Score(pub u32);

impl Score {
    pub const fn award(&mut self, points: u32) {
        self.0 += points;
    }

    /// Fixed-width digit decomposition, thousands first. Values wrap at 10000.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn digits(self) -> [u8; 4] {
        let value = self.0;
        [
            (value % 10_000 / 1_000) as u8,
            (value % 1_000 / 100) as u8,
            (value % 100 / 10) as u8,
            (value % 10) as u8,
        ]
    }
}

fn reset_score(mut score: ResMut<Score>) {
    *score = Score::default();
}

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.register_type::<Team>()
        .register_type::<Velocity>()
        .register_type::<Lives>()
        .register_type::<Score>()
        .init_resource::<Score>();

    app.add_systems(OnEnter(GameState::InGame), reset_score);

    app.add_plugins((
        ship::plugin,
        explosion::plugin,
        controls::plugin,
        enemy::plugin,
        projectile::plugin,
        starfield::plugin,
        outcome::plugin,
        hud::plugin,
    ));
}
