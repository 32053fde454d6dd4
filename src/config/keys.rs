// Key name parsing for the [keybindings] section

use anyhow::{anyhow, Context, Result};
use crossterm::event::KeyCode;

use super::types::KeyBindings;

/// Key bindings resolved to concrete key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left_paddle_up: KeyCode,
    pub left_paddle_down: KeyCode,
    pub right_paddle_up: KeyCode,
    pub right_paddle_down: KeyCode,
    pub back: KeyCode,
    pub menu_up: KeyCode,
    pub menu_down: KeyCode,
    pub menu_select: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left_paddle_up: KeyCode::Char('w'),
            left_paddle_down: KeyCode::Char('s'),
            right_paddle_up: KeyCode::Up,
            right_paddle_down: KeyCode::Down,
            back: KeyCode::Esc,
            menu_up: KeyCode::Up,
            menu_down: KeyCode::Down,
            menu_select: KeyCode::Enter,
        }
    }
}

impl KeyBindings {
    pub fn resolve(&self) -> Result<Controls> {
        let key = |name: &str, field: &str| {
            parse_key(name).with_context(|| format!("invalid binding for keybindings.{field}"))
        };

        Ok(Controls {
            left_paddle_up: key(&self.left_paddle_up, "left_paddle_up")?,
            left_paddle_down: key(&self.left_paddle_down, "left_paddle_down")?,
            right_paddle_up: key(&self.right_paddle_up, "right_paddle_up")?,
            right_paddle_down: key(&self.right_paddle_down, "right_paddle_down")?,
            back: key(&self.back, "back")?,
            menu_up: key(&self.menu_up, "menu_up")?,
            menu_down: key(&self.menu_down, "menu_down")?,
            menu_select: key(&self.menu_select, "menu_select")?,
        })
    }
}

/// Parse a key name such as "Up", "Enter" or "W". Names are case-insensitive
/// and letters map to their lowercase key code.
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let trimmed = name.trim();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return Err(anyhow!("unknown key name {:?}", name)),
            }
        }
    };
    Ok(code)
}

/// Fold letter case so 'W' with caps lock or shift still matches 'w'.
pub fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("Up").unwrap(), KeyCode::Up);
        assert_eq!(parse_key("down").unwrap(), KeyCode::Down);
        assert_eq!(parse_key("ENTER").unwrap(), KeyCode::Enter);
        assert_eq!(parse_key("Esc").unwrap(), KeyCode::Esc);
        assert_eq!(parse_key("Space").unwrap(), KeyCode::Char(' '));
    }

    #[test]
    fn test_parse_single_characters() {
        assert_eq!(parse_key("W").unwrap(), KeyCode::Char('w'));
        assert_eq!(parse_key("s").unwrap(), KeyCode::Char('s'));
        assert_eq!(parse_key(" 8 ").unwrap(), KeyCode::Char('8'));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!(parse_key("PageSideways").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_default_bindings_resolve_to_default_controls() {
        let controls = KeyBindings::default().resolve().unwrap();
        assert_eq!(controls, Controls::default());
    }

    #[test]
    fn test_resolve_names_the_bad_field() {
        let bindings = KeyBindings {
            right_paddle_up: "nope".to_string(),
            ..KeyBindings::default()
        };
        let err = bindings.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("right_paddle_up"));
    }

    #[test]
    fn test_normalize_folds_case() {
        assert_eq!(normalize(KeyCode::Char('W')), KeyCode::Char('w'));
        assert_eq!(normalize(KeyCode::Up), KeyCode::Up);
    }
}
