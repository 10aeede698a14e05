//! Main menu screen plugin: opens the `Menu::Main` overlay.

use bevy::prelude::*;

use crate::GameState;
use crate::menus::Menu;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::MainMenu), open_main_menu);
}

/// The title screen is nothing but the main menu overlay; opening it here
/// covers both a fresh launch and quitting back out of a match.
fn open_main_menu(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::Main);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn entering_main_menu_state_opens_the_overlay() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<GameState>();
        app.init_state::<Menu>();
        app.add_plugins(plugin);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::MainMenu);
        app.update();

        let next_menu = app.world().resource::<NextState<Menu>>();
        assert!(
            matches!(*next_menu, NextState::Pending(Menu::Main)),
            "Expected NextState<Menu>::Main, got {next_menu:?}"
        );
    }
}
