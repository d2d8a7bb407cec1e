use std::path::PathBuf;

use anyhow::Result;

const ROLLCHAT_DIR: &str = ".rollchat";
const CONFIG_FILE: &str = "config.toml";
const LOGS_DIR: &str = "logs";

/// Environment variable to override the rollchat directory.
const ROLLCHAT_DIR_ENV: &str = "ROLLCHAT_DIR";

/// Resolve the rollchat configuration directory.
/// Priority: ROLLCHAT_DIR env var > ~/.rollchat/
pub fn resolve_rollchat_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ROLLCHAT_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(ROLLCHAT_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Get the config file path: ~/.rollchat/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(resolve_rollchat_dir()?.join(CONFIG_FILE))
}

/// Get the logs directory, creating it if needed: ~/.rollchat/logs/
pub fn logs_dir() -> Result<PathBuf> {
    let dir = resolve_rollchat_dir()?.join(LOGS_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
