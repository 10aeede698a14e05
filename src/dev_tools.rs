//! Development tools — only included with `cargo run --features dev`.

use bevy::prelude::*;

use crate::gameplay::explosion::{Dead, Exploding, trigger_explosion};
use crate::gameplay::ship::Ship;
use crate::gameplay::{Side, Team, Velocity};
use crate::{GameSet, gameplay_running};

/// Detonate both player ships on Enter, to exercise the defeat path without
/// waiting for enemy fire.
fn debug_detonate_players(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut ships: Query<
        (Entity, &Team, &mut Velocity),
        (With<Ship>, Without<Exploding>, Without<Dead>),
    >,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }

    for (entity, team, mut velocity) in &mut ships {
        if team.side() == Side::Players {
            trigger_explosion(&mut commands, entity, &mut *velocity);
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        debug_detonate_players
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
