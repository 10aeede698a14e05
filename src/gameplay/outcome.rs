//! Match outcome: win/lose detection and end-of-frame cleanup.

use bevy::prelude::*;

use crate::gameplay::explosion::{Dead, Exploding, trigger_explosion};
use crate::gameplay::ship::Ship;
use crate::gameplay::{KILL_SCORE, Lives, Score, Side, Team, Velocity};
use crate::{GameSet, GameState, gameplay_running};

/// Match result. Starts Ongoing each time a match begins and moves one way:
/// the detection system only runs while Ongoing, so Won and Lost are final.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

// === Systems ===

/// Decide the match each frame. Defeat is checked first: if the last player
/// dies on the same frame the last enemy disappears, the match is lost.
fn detect_outcome(
    units: Query<(&Team, Has<Dead>), With<Ship>>,
    mut next_outcome: ResMut<NextState<Outcome>>,
) {
    let mut players = 0;
    let mut players_alive = 0;
    let mut enemies = 0;

    for (team, dead) in &units {
        match team.side() {
            Side::Players => {
                players += 1;
                if !dead {
                    players_alive += 1;
                }
            }
            Side::Enemies => enemies += 1,
        }
    }

    if players > 0 && players_alive == 0 {
        info!("both players destroyed, match lost");
        next_outcome.set(Outcome::Lost);
    } else if enemies == 0 {
        info!("enemy wave cleared, match won");
        next_outcome.set(Outcome::Won);
    }
}

/// Detonate any unit whose lives ran out this frame. The `Without` filters
/// make the trigger idempotent: a running animation is never restarted.
/// Runs in `GameSet::Cleanup`.
fn trigger_exhausted_explosions(
    mut commands: Commands,
    mut units: Query<
        (Entity, &Lives, &mut Velocity),
        (With<Ship>, Without<Exploding>, Without<Dead>),
    >,
) {
    for (entity, lives, mut velocity) in &mut units {
        if lives.exhausted() {
            trigger_explosion(&mut commands, entity, &mut *velocity);
        }
    }
}

/// Remove at most one dead enemy per frame, paying out its kill score.
/// Runs in `GameSet::Cleanup`, after explosion triggering.
fn remove_dead_enemies(
    mut commands: Commands,
    mut score: ResMut<Score>,
    fallen: Query<(Entity, &Team), (With<Ship>, With<Dead>)>,
) {
    let dead_enemy = fallen.iter().find(|(_, team)| **team == Team::Enemy);

    if let Some((entity, _)) = dead_enemy {
        commands.entity(entity).despawn();
        score.award(KILL_SCORE);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        detect_outcome
            .in_set(GameSet::Outcome)
            .run_if(gameplay_running),
    );

    app.add_systems(
        Update,
        (trigger_exhausted_explosions, remove_dead_enemies)
            .chain()
            .in_set(GameSet::Cleanup)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outcome_default_is_ongoing() {
        assert_eq!(Outcome::default(), Outcome::Ongoing);
    }
}
