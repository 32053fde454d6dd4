// Pong configuration types
// Defaults reproduce the classic 800x600 field

use anyhow::{bail, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Highest accepted `game.fps`
pub const MAX_FPS: u64 = 1000;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        if self.menu.title.trim().is_empty() {
            bail!("menu title must not be empty");
        }
        Ok(())
    }
}

/// Field geometry, speeds and colors. All distances are in field pixels,
/// speeds in pixels per frame.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub fps: u64,

    // Colors (RGB values 0-255)
    pub background_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub score_color: [u8; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            paddle_width: 15.0,
            paddle_height: 90.0,
            ball_size: 15.0,
            paddle_speed: 5.0,
            ball_speed: 7.0,
            fps: 60,
            background_color: [0, 0, 0],
            paddle_color: [255, 255, 255],
            ball_color: [255, 255, 255],
            score_color: [255, 255, 255],
        }
    }
}

impl GameConfig {
    /// Check the geometry invariants the simulation relies on.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("game.{name} must be a positive number, got {value}");
            }
        }
        if !(1..=MAX_FPS).contains(&self.fps) {
            bail!("game.fps must be between 1 and {MAX_FPS}, got {}", self.fps);
        }
        if self.paddle_height >= self.height || self.ball_size >= self.height {
            bail!("paddle and ball must be shorter than the field height");
        }
        // Both paddles sit PADDLE_MARGIN in from their edge and must not meet.
        if 2.0 * (crate::game::PADDLE_MARGIN + self.paddle_width) + self.ball_size >= self.width {
            bail!("field width leaves no room between the paddles");
        }
        Ok(())
    }

    pub fn background(&self) -> Color {
        rgb(self.background_color)
    }

    pub fn paddle(&self) -> Color {
        rgb(self.paddle_color)
    }

    pub fn ball(&self) -> Color {
        rgb(self.ball_color)
    }

    pub fn score(&self) -> Color {
        rgb(self.score_color)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (player 1)
    pub left_paddle_up: String,
    pub left_paddle_down: String,

    // Right paddle (player 2)
    pub right_paddle_up: String,
    pub right_paddle_down: String,

    // Leaves the game, or dismisses the menu
    pub back: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_paddle_up: "W".to_string(),
            left_paddle_down: "S".to_string(),
            right_paddle_up: "Up".to_string(),
            right_paddle_down: "Down".to_string(),
            back: "Esc".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    pub selected_color: [u8; 3],
    pub unselected_color: [u8; 3],
    pub background_color: [u8; 3],
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "PONG".to_string(),
            selected_color: [255, 255, 0],
            unselected_color: [255, 255, 255],
            background_color: [0, 0, 0],
        }
    }
}

impl MenuConfig {
    pub fn selected(&self) -> Color {
        rgb(self.selected_color)
    }

    pub fn unselected(&self) -> Color {
        rgb(self.unselected_color)
    }

    pub fn background(&self) -> Color {
        rgb(self.background_color)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    // How long a key counts as held after its last press, for terminals
    // that never report key releases
    pub hold_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hold_timeout_ms: 120,
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let game = GameConfig {
            paddle_height: 0.0,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());

        let game = GameConfig {
            ball_speed: -7.0,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());

        let game = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());
    }

    #[test]
    fn test_rejects_absurd_frame_rate() {
        let game = GameConfig {
            fps: 1 << 32,
            ..GameConfig::default()
        };
        let err = game.validate().unwrap_err();
        assert!(err.to_string().contains("game.fps"));

        let game = GameConfig {
            fps: MAX_FPS,
            ..GameConfig::default()
        };
        assert!(game.validate().is_ok());
    }

    #[test]
    fn test_rejects_paddle_taller_than_field() {
        let game = GameConfig {
            paddle_height: 600.0,
            ..GameConfig::default()
        };
        let err = game.validate().unwrap_err();
        assert!(err.to_string().contains("shorter"));
    }

    #[test]
    fn test_rejects_field_too_narrow_for_paddles() {
        let game = GameConfig {
            width: 120.0,
            ..GameConfig::default()
        };
        assert!(game.validate().is_err());
    }

    #[test]
    fn test_colors_map_to_rgb() {
        let menu = MenuConfig::default();
        assert_eq!(menu.selected(), Color::Rgb(255, 255, 0));
        assert_eq!(GameConfig::default().background(), Color::Rgb(0, 0, 0));
    }
}
