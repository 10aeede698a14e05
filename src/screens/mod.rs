//! Screen plugins for each top-level game state.

mod in_game;
mod loading;
mod main_menu;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((loading::plugin, main_menu::plugin, in_game::plugin));
}
