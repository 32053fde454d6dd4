use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::normalize;

use super::state::Game;

/// Signals that end the game loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Back to the menu
    Leave,
    /// Close the program
    Quit,
}

/// Which keys are currently held down.
///
/// Terminals with the kitty keyboard protocol report releases, so a key is
/// held from its press until its release. Elsewhere only presses and
/// auto-repeats arrive, and a key counts as held for `hold_timeout` after the
/// most recent one.
#[derive(Debug)]
pub struct KeyboardState {
    held: HashMap<KeyCode, Instant>,
    hold_timeout: Option<Duration>,
}

impl KeyboardState {
    pub fn new(reports_releases: bool, hold_timeout: Duration) -> Self {
        Self {
            held: HashMap::new(),
            hold_timeout: (!reports_releases).then_some(hold_timeout),
        }
    }

    pub fn apply(&mut self, key: &KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(code, Instant::now());
            }
            KeyEventKind::Release => {
                self.held.remove(&code);
            }
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.held.insert(normalize(code), Instant::now());
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        match (self.held.get(&normalize(code)), self.hold_timeout) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(last), Some(timeout)) => last.elapsed() <= timeout,
        }
    }
}

/// Ctrl+C plays the role of a window-close request, since raw mode swallows
/// the interrupt signal.
pub fn is_quit_signal(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && normalize(key.code) == KeyCode::Char('c')
}

impl Game {
    /// Feed one terminal event into the keyboard state, reporting whether it
    /// ends the game loop.
    pub fn handle_event(&self, keys: &mut KeyboardState, event: &Event) -> Option<InputAction> {
        let Event::Key(key) = event else {
            return None;
        };

        if is_quit_signal(key) {
            return Some(InputAction::Quit);
        }
        if key.kind == KeyEventKind::Press && normalize(key.code) == self.controls.back {
            return Some(InputAction::Leave);
        }

        keys.apply(key);
        None
    }

    /// Move paddles whose keys are held, one step per frame.
    pub fn handle_input(&mut self, keys: &KeyboardState) {
        let speed = self.config.paddle_speed;
        let height = self.config.height;
        let controls = self.controls;

        // Player 1
        if keys.is_held(controls.left_paddle_up) && self.left_paddle.rect.top() > 0.0 {
            self.left_paddle.shift(-speed, height);
        }
        if keys.is_held(controls.left_paddle_down) && self.left_paddle.rect.bottom() < height {
            self.left_paddle.shift(speed, height);
        }

        // Player 2
        if keys.is_held(controls.right_paddle_up) && self.right_paddle.rect.top() > 0.0 {
            self.right_paddle.shift(-speed, height);
        }
        if keys.is_held(controls.right_paddle_down) && self.right_paddle.rect.bottom() < height {
            self.right_paddle.shift(speed, height);
        }
    }
}
