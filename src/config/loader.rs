// Configuration file loading

use super::keys::Controls;
use super::types::Config;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pong");
    path.push("config.toml");
    path
}

/// Load configuration from the default location. A missing file means
/// defaults; a broken one is reported and replaced by defaults.
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse_config(&contents)),
        Err(e) => {
            report(&format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ));
            Ok(Config::default())
        }
    }
}

/// Parse and validate a config document, falling back to defaults on error.
pub fn parse_config(contents: &str) -> Config {
    let config: Config = match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            report(&format!("Failed to parse config file: {}", e));
            return Config::default();
        }
    };

    if let Err(e) = config.validate() {
        report(&format!("Invalid configuration: {:#}", e));
        return Config::default();
    }

    config
}

/// Resolve key names, keeping the default bindings if any name is unknown.
pub fn load_controls(config: &Config) -> Controls {
    config.keybindings.resolve().unwrap_or_else(|e| {
        report(&format!("{:#}", e));
        Controls::default()
    })
}

// Config is loaded before the terminal is taken over, so stderr is still
// visible to the user.
fn report(message: &str) {
    warn!("{}", message);
    eprintln!("Warning: {}", message);
    eprintln!("Using default configuration");
}
