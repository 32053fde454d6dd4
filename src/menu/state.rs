// Menu state: items, selection and the actions they trigger

use anyhow::{ensure, Result};

use crate::config::{GameConfig, MenuConfig};

/// What an item does when confirmed. The driver dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    StartGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub action: ItemAction,
    /// Center of the label in field pixels
    pub position: (f32, f32),
    pub is_selected: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: ItemAction, position: (f32, f32)) -> Self {
        Self {
            label: label.into(),
            action,
            position,
            is_selected: false,
        }
    }
}

/// Result of handling one menu event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Stay in the menu
    None,
    /// An item was confirmed
    Select(ItemAction),
    /// Menu dismissed without choosing
    Back,
}

impl MenuAction {
    pub fn keeps_running(&self) -> bool {
        matches!(self, MenuAction::None)
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// Quit signal seen; the program should end
    Terminate,
    Activate(ItemAction),
    Dismissed,
}

impl MenuExit {
    /// Whether the driver should show the menu again after handling this exit
    pub fn resumes(&self) -> bool {
        !matches!(self, MenuExit::Terminate)
    }
}

/// Menu navigation inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Up,
    Down,
    Confirm,
    Cancel,
    Other,
}

pub struct Menu {
    pub title: String,
    /// Center of the title in field pixels
    pub title_position: (f32, f32),
    pub items: Vec<MenuItem>,
    pub selected_index: usize,
    pub style: MenuConfig,
    /// Field size the positions are expressed in
    pub field: (f32, f32),
}

impl Menu {
    pub fn new(mut items: Vec<MenuItem>, style: MenuConfig, game: &GameConfig) -> Result<Self> {
        ensure!(!items.is_empty(), "a menu needs at least one item");

        for item in items.iter_mut() {
            item.is_selected = false;
        }
        items[0].is_selected = true;

        Ok(Self {
            title: style.title.clone(),
            title_position: (game.width / 2.0, game.height / 4.0),
            items,
            selected_index: 0,
            style,
            field: (game.width, game.height),
        })
    }

    /// The start screen: "Start Game" at the center, "Quit" 100 px below.
    pub fn main_menu(style: MenuConfig, game: &GameConfig) -> Result<Self> {
        let center_x = game.width / 2.0;
        let center_y = game.height / 2.0;
        let items = vec![
            MenuItem::new("Start Game", ItemAction::StartGame, (center_x, center_y)),
            MenuItem::new("Quit", ItemAction::Quit, (center_x, center_y + 100.0)),
        ];
        Self::new(items, style, game)
    }

    pub fn selected_item(&self) -> &MenuItem {
        &self.items[self.selected_index]
    }

    pub fn handle_event(&mut self, event: MenuEvent) -> MenuAction {
        match event {
            MenuEvent::Up => {
                let len = self.items.len();
                self.select((self.selected_index + len - 1) % len);
                MenuAction::None
            }
            MenuEvent::Down => {
                self.select((self.selected_index + 1) % self.items.len());
                MenuAction::None
            }
            MenuEvent::Confirm => MenuAction::Select(self.selected_item().action),
            MenuEvent::Cancel => MenuAction::Back,
            MenuEvent::Other => MenuAction::None,
        }
    }

    fn select(&mut self, index: usize) {
        self.items[self.selected_index].is_selected = false;
        self.selected_index = index;
        self.items[self.selected_index].is_selected = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::main_menu(MenuConfig::default(), &GameConfig::default()).unwrap()
    }

    fn selected_count(menu: &Menu) -> usize {
        menu.items.iter().filter(|item| item.is_selected).count()
    }

    #[test]
    fn test_first_item_selected_on_construction() {
        let menu = menu();
        assert_eq!(menu.selected_index, 0);
        assert!(menu.items[0].is_selected);
        assert_eq!(selected_count(&menu), 1);
        assert_eq!(menu.items[0].position, (400.0, 300.0));
        assert_eq!(menu.items[1].position, (400.0, 400.0));
        assert_eq!(menu.title_position, (400.0, 150.0));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = menu();

        assert_eq!(menu.handle_event(MenuEvent::Up), MenuAction::None);
        assert_eq!(menu.selected_item().action, ItemAction::Quit);

        menu.handle_event(MenuEvent::Down);
        assert_eq!(menu.selected_item().action, ItemAction::StartGame);

        menu.handle_event(MenuEvent::Down);
        menu.handle_event(MenuEvent::Down);
        assert_eq!(menu.selected_index, 0);
        assert_eq!(selected_count(&menu), 1);
    }

    #[test]
    fn test_confirm_start_game() {
        let mut menu = menu();
        let action = menu.handle_event(MenuEvent::Confirm);
        assert_eq!(action, MenuAction::Select(ItemAction::StartGame));
        assert!(!action.keeps_running());
    }

    #[test]
    fn test_confirm_quit() {
        let mut menu = menu();
        menu.handle_event(MenuEvent::Down);
        assert_eq!(
            menu.handle_event(MenuEvent::Confirm),
            MenuAction::Select(ItemAction::Quit)
        );
    }

    #[test]
    fn test_cancel_and_other_events() {
        let mut menu = menu();
        assert_eq!(menu.handle_event(MenuEvent::Cancel), MenuAction::Back);
        assert!(!MenuAction::Back.keeps_running());

        let action = menu.handle_event(MenuEvent::Other);
        assert!(action.keeps_running());
        assert_eq!(menu.selected_index, 0);
    }

    #[test]
    fn test_single_item_menu_stays_put() {
        let items = vec![MenuItem::new("Only", ItemAction::Quit, (0.0, 0.0))];
        let mut menu = Menu::new(items, MenuConfig::default(), &GameConfig::default()).unwrap();
        menu.handle_event(MenuEvent::Down);
        menu.handle_event(MenuEvent::Up);
        assert_eq!(menu.selected_index, 0);
        assert!(menu.items[0].is_selected);
    }

    #[test]
    fn test_empty_menu_is_rejected() {
        assert!(Menu::new(Vec::new(), MenuConfig::default(), &GameConfig::default()).is_err());
    }

    #[test]
    fn test_exit_resumes() {
        assert!(!MenuExit::Terminate.resumes());
        assert!(MenuExit::Dismissed.resumes());
        assert!(MenuExit::Activate(ItemAction::StartGame).resumes());
    }
}
