//! In-match HUD: the score readout and one life-icon row per player.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::gameplay::controls::PLAYER_LIVES;
use crate::gameplay::ship::Ship;
use crate::gameplay::{Lives, Score, Team};
use crate::theme::palette;
use crate::{GameSet, GameState, gameplay_running};

/// Side length of one life icon, pixels.
const LIFE_ICON_SIZE: f32 = 20.0;

// === Components ===

/// One fixed-width score digit; `0` is the thousands place.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScoreDigit(pub usize);

/// One heart in a player's life row. Icons with `index >= lives` are removed,
/// so the row shrinks as lives go and never dips below empty.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct LifeIcon {
    pub team: Team,
    pub index: i32,
}

// === Setup ===

fn life_row(parent: &mut ChildSpawnerCommands, team: Team, color: Color) {
    parent
        .spawn((
            Name::new(format!("{team:?} Lives")),
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|column| {
            column.spawn((
                Text::new("LIVES"),
                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                TextColor(palette::BODY_TEXT),
            ));
            column
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    for index in 0..PLAYER_LIVES {
                        row.spawn((
                            LifeIcon { team, index },
                            Node {
                                width: Val::Px(LIFE_ICON_SIZE),
                                height: Val::Px(LIFE_ICON_SIZE),
                                ..default()
                            },
                            BackgroundColor(color),
                        ));
                    }
                });
        });
}

/// Spawn the HUD for a new match: score block top-center, life rows on the
/// top corners.
fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud Root"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(20.0)),
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|root| {
            life_row(root, Team::Player1, palette::PLAYER_ONE_SHIP);

            root.spawn((
                Name::new("Score Block"),
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
            ))
            .with_children(|block| {
                block.spawn((
                    Text::new("SCORE"),
                    TextFont::from_font_size(palette::FONT_SIZE_HUD),
                    TextColor(palette::BODY_TEXT),
                ));
                block
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(6.0),
                        ..default()
                    })
                    .with_children(|digits| {
                        for place in 0..4 {
                            digits.spawn((
                                ScoreDigit(place),
                                Text::new("0"),
                                TextFont::from_font_size(palette::FONT_SIZE_HUD),
                                TextColor(palette::SCORE_TEXT),
                            ));
                        }
                    });
            });

            life_row(root, Team::Player2, palette::PLAYER_TWO_SHIP);
        });
}

// === Systems ===

/// Repaint the four digit glyphs from the score.
/// Runs in `GameSet::Ui`.
fn sync_score_digits(score: Res<Score>, mut digits: Query<(&ScoreDigit, &mut Text)>) {
    let values = score.digits();

    for (digit, mut text) in &mut digits {
        *text = Text::new(values[digit.0].to_string());
    }
}

/// Shrink each life row to the owner's remaining lives. Icons are only ever
/// removed; a row that is already empty has nothing left to pop.
/// Runs in `GameSet::Ui`.
fn sync_life_icons(
    mut commands: Commands,
    players: Query<(&Team, &Lives), With<Ship>>,
    icons: Query<(Entity, &LifeIcon)>,
) {
    for (entity, icon) in &icons {
        let lives = players
            .iter()
            .find(|(team, _)| **team == icon.team)
            .map_or(0, |(_, lives)| lives.0);

        if icon.index >= lives {
            commands.entity(entity).despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ScoreDigit>().register_type::<LifeIcon>();

    app.add_systems(OnEnter(GameState::InGame), setup_hud);

    app.add_systems(
        Update,
        (sync_score_digits, sync_life_icons)
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
