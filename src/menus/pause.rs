//! Pause menu UI: overlay panel with the full entry list and resume/quit keys.

use bevy::prelude::*;

use super::{Menu, MenuContext, MenuItem, MenuItemLabel, MenuSelection, item_color, navigate};
use crate::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_menu);
    app.add_systems(Update, handle_pause_input.run_if(in_state(Menu::Pause)));
}

fn spawn_pause_menu(mut commands: Commands, mut selection: ResMut<MenuSelection>) {
    *selection = MenuSelection(Some(MenuItem::Start));

    commands
        .spawn((
            widget::ui_root("Pause Menu"),
            BackgroundColor(palette::OVERLAY_BACKGROUND),
            DespawnOnExit(Menu::Pause),
        ))
        .with_children(|root| {
            root.spawn(widget::header("PAUSED"));

            for &item in MenuItem::items(MenuContext::Pause) {
                root.spawn((
                    MenuItemLabel(item),
                    Text::new(item.label()),
                    TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                    TextColor(item_color(item == MenuItem::Start)),
                ));
            }

            root.spawn((
                Text::new("ESC to Resume | Q to Quit"),
                TextFont::from_font_size(palette::FONT_SIZE_PROMPT),
                TextColor(palette::BODY_TEXT),
            ));
        });
}

fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<MenuSelection>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_menu.set(Menu::None);
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        next_game_state.set(GameState::MainMenu);
        // Menu::Main will be set by the main menu screen's OnEnter system.
        return;
    }

    navigate(&keyboard, &mut selection, MenuContext::Pause);

    if keyboard.just_pressed(KeyCode::Enter) {
        match selection.0 {
            // Start from the pause panel resumes the running match.
            Some(MenuItem::Start) => next_menu.set(Menu::None),
            Some(MenuItem::Load) => info!("load game selected, but no save format exists yet"),
            Some(MenuItem::Save) => info!("save game selected, but no save format exists yet"),
            None => {}
        }
    }
}
