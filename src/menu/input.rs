// Menu input handling and the menu loop

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tracing::debug;

use super::render::render_menu;
use super::state::{Menu, MenuAction, MenuEvent, MenuExit};
use crate::config::{normalize, Controls};
use crate::display::Display;
use crate::game::input::is_quit_signal;
use crate::game_modes::FrameLimiter;

impl Menu {
    /// Show the menu until an item is confirmed, it is dismissed, or a quit
    /// signal arrives.
    pub fn run(&mut self, display: &mut Display, controls: &Controls, fps: u64) -> Result<MenuExit> {
        let mut limiter = FrameLimiter::new(fps);

        loop {
            for event in display.poll_events(Duration::ZERO)? {
                let event = match read_menu_input(&event, controls) {
                    Some(MenuInput::QuitSignal) => return Ok(MenuExit::Terminate),
                    Some(MenuInput::Navigate(event)) => event,
                    None => continue,
                };

                match self.handle_event(event) {
                    MenuAction::None => {
                        debug!(selected = %self.selected_item().label, "menu selection")
                    }
                    MenuAction::Select(action) => return Ok(MenuExit::Activate(action)),
                    MenuAction::Back => return Ok(MenuExit::Dismissed),
                }
            }

            self.draw(display)?;
            limiter.tick();
        }
    }

    pub fn draw(&self, display: &mut Display) -> Result<()> {
        display.draw(|f| render_menu(f, self))
    }
}

/// A terminal event as seen by the menu loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Navigate(MenuEvent),
    QuitSignal,
}

/// Translate a terminal event, ignoring everything but key presses.
pub fn read_menu_input(event: &Event, controls: &Controls) -> Option<MenuInput> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_quit_signal(key) {
        return Some(MenuInput::QuitSignal);
    }
    Some(MenuInput::Navigate(menu_event(key, controls)))
}

fn menu_event(key: &KeyEvent, controls: &Controls) -> MenuEvent {
    let code = normalize(key.code);
    if code == controls.menu_up {
        MenuEvent::Up
    } else if code == controls.menu_down {
        MenuEvent::Down
    } else if code == controls.menu_select {
        MenuEvent::Confirm
    } else if code == controls.back {
        MenuEvent::Cancel
    } else {
        MenuEvent::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_default_menu_keys() {
        let controls = Controls::default();
        let read = |code| read_menu_input(&press(code), &controls);

        assert_eq!(read(KeyCode::Up), Some(MenuInput::Navigate(MenuEvent::Up)));
        assert_eq!(read(KeyCode::Down), Some(MenuInput::Navigate(MenuEvent::Down)));
        assert_eq!(read(KeyCode::Enter), Some(MenuInput::Navigate(MenuEvent::Confirm)));
        assert_eq!(read(KeyCode::Esc), Some(MenuInput::Navigate(MenuEvent::Cancel)));
        assert_eq!(read(KeyCode::Char('x')), Some(MenuInput::Navigate(MenuEvent::Other)));
    }

    #[test]
    fn test_ctrl_c_is_quit_signal() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            read_menu_input(&event, &Controls::default()),
            Some(MenuInput::QuitSignal)
        );
    }

    #[test]
    fn test_releases_and_non_key_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(read_menu_input(&release, &Controls::default()), None);
        assert_eq!(read_menu_input(&Event::Resize(10, 10), &Controls::default()), None);
    }

    #[test]
    fn test_rebound_select_key() {
        let controls = Controls {
            menu_select: KeyCode::Char(' '),
            ..Controls::default()
        };
        assert_eq!(
            read_menu_input(&press(KeyCode::Char(' ')), &controls),
            Some(MenuInput::Navigate(MenuEvent::Confirm))
        );
    }
}
