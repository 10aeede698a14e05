//! Menu overlays that can appear on top of any screen.
//!
//! The `Menu` state is orthogonal to `GameState` — menus are overlays, not
//! screens. `Menu::Main` appears over the title screen, `Menu::Pause` over a
//! running match. Selection is a plain enum plus pure mapping functions; the
//! label entities just repaint from it.

pub mod endgame;
pub mod main_menu;
pub mod pause;

use bevy::prelude::*;

use crate::theme::palette;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No menu overlay is active.
    #[default]
    None,
    /// Main menu (shown on the title screen).
    Main,
    /// Pause menu (shown in-game).
    Pause,
}

/// Which menu a selection lives in. The title menu has no Save entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuContext {
    Title,
    Pause,
}

/// Selectable menu entries. Load and Save are placeholders with no backing
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Start,
    Load,
    Save,
}

impl MenuItem {
    /// Entries visible in the given context, top to bottom.
    #[must_use]
    pub const fn items(context: MenuContext) -> &'static [Self] {
        match context {
            MenuContext::Title => &[Self::Start, Self::Load],
            MenuContext::Pause => &[Self::Start, Self::Load, Self::Save],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Game",
            Self::Load => "Load Game",
            Self::Save => "Save Game",
        }
    }

    /// Cyclic step downward through the context's visible entries.
    #[must_use]
    pub const fn down(self, context: MenuContext) -> Self {
        match (self, context) {
            (Self::Start, _) => Self::Load,
            (Self::Load, MenuContext::Title) | (Self::Save, _) => Self::Start,
            (Self::Load, MenuContext::Pause) => Self::Save,
        }
    }

    /// Cyclic step upward.
    #[must_use]
    pub const fn up(self, context: MenuContext) -> Self {
        match (self, context) {
            (Self::Start, MenuContext::Title) | (Self::Save, _) => Self::Load,
            (Self::Start, MenuContext::Pause) => Self::Save,
            (Self::Load, _) => Self::Start,
        }
    }
}

/// Label color for an entry given its selection state.
#[must_use]
pub const fn item_color(selected: bool) -> Color {
    if selected {
        palette::MENU_SELECTED
    } else {
        palette::MENU_ITEM
    }
}

/// The currently highlighted entry of whichever menu is open.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSelection(pub Option<MenuItem>);

/// Marker tying a label entity to its entry.
#[derive(Component, Debug, Clone, Copy)]
pub struct MenuItemLabel(pub MenuItem);

/// Apply up/down navigation from the sampled key state.
pub(crate) fn navigate(
    keyboard: &ButtonInput<KeyCode>,
    selection: &mut MenuSelection,
    context: MenuContext,
) {
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        selection.0 = selection.0.map(|item| item.up(context));
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        selection.0 = selection.0.map(|item| item.down(context));
    }
}

/// Repaint menu labels from the current selection.
fn sync_item_colors(
    selection: Res<MenuSelection>,
    mut labels: Query<(&MenuItemLabel, &mut TextColor)>,
) {
    for (label, mut color) in &mut labels {
        *color = TextColor(item_color(selection.0 == Some(label.0)));
    }
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.init_resource::<MenuSelection>();

    app.add_plugins((main_menu::plugin, pause::plugin, endgame::plugin));

    app.add_systems(Update, sync_item_colors.run_if(not(in_state(Menu::None))));

    // Pause/unpause virtual time when any menu overlay opens/closes. This
    // freezes the simulation clock for every timer- and dt-based system.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_menu_cycles_between_start_and_load() {
        assert_eq!(MenuItem::Start.down(MenuContext::Title), MenuItem::Load);
        assert_eq!(MenuItem::Load.down(MenuContext::Title), MenuItem::Start);
        assert_eq!(MenuItem::Start.up(MenuContext::Title), MenuItem::Load);
        assert_eq!(MenuItem::Load.up(MenuContext::Title), MenuItem::Start);
    }

    #[test]
    fn pause_menu_cycles_through_all_three() {
        assert_eq!(MenuItem::Start.down(MenuContext::Pause), MenuItem::Load);
        assert_eq!(MenuItem::Load.down(MenuContext::Pause), MenuItem::Save);
        assert_eq!(MenuItem::Save.down(MenuContext::Pause), MenuItem::Start);

        assert_eq!(MenuItem::Start.up(MenuContext::Pause), MenuItem::Save);
        assert_eq!(MenuItem::Save.up(MenuContext::Pause), MenuItem::Load);
        assert_eq!(MenuItem::Load.up(MenuContext::Pause), MenuItem::Start);
    }

    #[test]
    fn save_is_hidden_on_the_title_menu() {
        assert!(!MenuItem::items(MenuContext::Title).contains(&MenuItem::Save));
        assert!(MenuItem::items(MenuContext::Pause).contains(&MenuItem::Save));
    }

    #[test]
    fn selected_items_render_highlighted() {
        assert_ne!(item_color(true), item_color(false));
    }

    #[test]
    fn navigation_without_an_open_menu_is_inert() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowDown);

        let mut selection = MenuSelection(None);
        navigate(&keyboard, &mut selection, MenuContext::Title);
        assert_eq!(selection, MenuSelection(None));
    }

    fn create_menu_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<Menu>();
        app.add_systems(OnExit(Menu::None), pause_virtual_time);
        app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
        app.update();
        app
    }

    #[test]
    fn virtual_time_paused_while_a_menu_is_open() {
        let mut app = create_menu_test_app();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Pause);
        app.update();

        let time = app.world().resource::<Time<Virtual>>();
        assert!(
            time.is_paused(),
            "Time<Virtual> should be paused when menu is open"
        );
    }

    #[test]
    fn virtual_time_resumes_when_the_menu_closes() {
        let mut app = create_menu_test_app();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Pause);
        app.update();

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::None);
        app.update();

        let time = app.world().resource::<Time<Virtual>>();
        assert!(
            !time.is_paused(),
            "Time<Virtual> should be unpaused when menu closes"
        );
    }
}
