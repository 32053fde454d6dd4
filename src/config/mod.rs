// Configuration module for Pong
// Loads game, key binding and menu settings from an optional TOML file

pub mod keys;
pub mod loader;
pub mod types;

pub use keys::{normalize, Controls};
pub use loader::{load_config, load_controls};
pub use types::{GameConfig, MenuConfig};
