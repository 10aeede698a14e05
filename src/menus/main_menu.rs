//! Main menu UI: bordered panel with the title and keyboard-driven entries.

use bevy::prelude::*;

use super::{Menu, MenuContext, MenuItem, MenuItemLabel, MenuSelection, item_color, navigate};
use crate::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Main), spawn_main_menu);
    app.add_systems(
        Update,
        handle_main_menu_input.run_if(in_state(Menu::Main)),
    );
}

fn spawn_main_menu(mut commands: Commands, mut selection: ResMut<MenuSelection>) {
    *selection = MenuSelection(Some(MenuItem::Start));

    commands
        .spawn((
            widget::ui_root("Main Menu Screen"),
            DespawnOnExit(Menu::Main),
        ))
        .with_children(|root| {
            root.spawn((
                Name::new("Main Menu Panel"),
                Node {
                    width: Val::Px(500.0),
                    min_height: Val::Px(400.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::SpaceEvenly,
                    padding: UiRect::all(Val::Px(40.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(palette::PANEL_BACKGROUND),
                BorderColor::all(palette::PANEL_BORDER),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new("STAR ASSAULT"),
                    TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                    TextColor(palette::HEADER_TEXT),
                ));

                for &item in MenuItem::items(MenuContext::Title) {
                    panel.spawn((
                        MenuItemLabel(item),
                        Text::new(item.label()),
                        TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                        TextColor(item_color(item == MenuItem::Start)),
                    ));
                }

                panel.spawn((
                    Text::new("Arrows to choose | ENTER to confirm | ESC to quit"),
                    TextFont::from_font_size(palette::FONT_SIZE_PROMPT),
                    TextColor(palette::BODY_TEXT),
                ));
            });
        });
}

fn handle_main_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<MenuSelection>,
    mut next_game_state: ResMut<NextState<GameState>>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
        return;
    }

    navigate(&keyboard, &mut selection, MenuContext::Title);

    if keyboard.just_pressed(KeyCode::Enter) {
        match selection.0 {
            Some(MenuItem::Start) => {
                next_game_state.set(GameState::InGame);
                next_menu.set(Menu::None);
            }
            Some(MenuItem::Load) => info!("load game selected, but no save format exists yet"),
            _ => {}
        }
    }
}
