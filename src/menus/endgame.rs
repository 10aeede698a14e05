//! Victory/defeat screens: an opaque full-screen panel that replaces the
//! battle view once the match is decided.

use bevy::prelude::*;

use crate::GameState;
use crate::gameplay::Score;
use crate::gameplay::outcome::Outcome;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Outcome::Won), spawn_victory_screen);
    app.add_systems(OnEnter(Outcome::Lost), spawn_defeat_screen);
    app.add_systems(
        Update,
        handle_endgame_input.run_if(in_state(Outcome::Won).or(in_state(Outcome::Lost))),
    );
}

fn spawn_victory_screen(mut commands: Commands, score: Res<Score>) {
    spawn_endgame_screen(&mut commands, "VICTORY!", palette::VICTORY_TEXT, *score);
}

fn spawn_defeat_screen(mut commands: Commands, score: Res<Score>) {
    spawn_endgame_screen(&mut commands, "DEFEAT", palette::DEFEAT_TEXT, *score);
}

/// Shared screen for both endings. The background is opaque on purpose: once
/// the match is over only this screen (and the starfield it covers) exists
/// visually.
fn spawn_endgame_screen(commands: &mut Commands, title: &str, title_color: Color, score: Score) {
    let [thousands, hundreds, tens, units] = score.digits();

    commands
        .spawn((
            widget::ui_root("Endgame Screen"),
            BackgroundColor(palette::ENDGAME_BACKGROUND),
            GlobalZIndex(1),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(title),
                TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                TextColor(title_color),
            ));
            root.spawn(widget::label(format!(
                "FINAL SCORE {thousands}{hundreds}{tens}{units}"
            )));
            root.spawn((
                Text::new("Press ENTER for Main Menu"),
                TextFont::from_font_size(palette::FONT_SIZE_PROMPT),
                TextColor(palette::BODY_TEXT),
            ));
        });
}

fn handle_endgame_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_game_state.set(GameState::MainMenu);
    }
}
