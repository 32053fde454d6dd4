// Diagnostic logging for Pong
// The terminal belongs to the UI, so log output goes to a file, and only when
// PONG_LOG is set (e.g. PONG_LOG=debug, PONG_LOG=pong::game=debug).

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PONG_LOG";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("pong.log")
}

/// Install the file subscriber if `PONG_LOG` is set. Returns the log file
/// path when logging is on.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(directives) = std::env::var_os(LOG_ENV) else {
        return Ok(None);
    };
    let directives = directives.to_string_lossy();

    let filter = EnvFilter::try_new(directives.as_ref())
        .with_context(|| format!("invalid {LOG_ENV} filter {directives:?}"))?;

    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_temp_dir() {
        let path = log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().unwrap(), "pong.log");
    }

    #[test]
    fn test_filter_directives_parse() {
        assert!(EnvFilter::try_new("pong=debug,warn").is_ok());
    }
}
