//! Config file discovery

use screener_core::{Config, Result, ScreenError};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "SCREENER_CONFIG";

/// Config file to load: an explicit path, else `$SCREENER_CONFIG`, else
/// `<config dir>/screener/config.json` when that file exists
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("screener").join("config.json"))
        .filter(|path| path.is_file())
}

/// Defaults overlaid with the resolved config file, if any
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = resolve_config_path(explicit) else {
        tracing::debug!("no config file, using defaults");
        return Ok(Config::default());
    };

    let json = std::fs::read_to_string(&path).map_err(|e| ScreenError::io(&path, e))?;
    let config = Config::from_json_str(&json, &path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
