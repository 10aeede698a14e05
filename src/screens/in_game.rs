//! In-game screen plugin: pause keybinding.
//!
//! Battle visuals and logic live in the gameplay domain plugins; this plugin
//! only owns the key that opens the pause overlay.

use bevy::prelude::*;

use crate::GameState;
use crate::gameplay::outcome::Outcome;
use crate::menus::Menu;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        open_pause_menu.run_if(
            in_state(GameState::InGame)
                .and(in_state(Menu::None))
                .and(in_state(Outcome::Ongoing)),
        ),
    );
}

fn open_pause_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_menu.set(Menu::Pause);
    }
}
