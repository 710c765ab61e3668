//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{Result, TabloError};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the store root, falling back to defaults.
///
/// If `.tablo/config.json` exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root).map_err(|e| match e {
        TabloError::InvalidJson(msg) => TabloError::ConfigError(msg),
        other => other,
    })?;
    if config.max_retouch_photos == Some(0) {
        return Err(TabloError::ConfigError(
            "max_retouch_photos must be at least 1 or null".to_string(),
        ));
    }
    Ok(config)
}

/// Create `.tablo/config.json` with defaults.
///
/// Returns false without touching anything if it already exists and
/// `force` is not set.
pub fn init_config(root: &Path, force: bool) -> Result<bool> {
    let path = fs::get_config_path(root);
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write_json(&path, &Config::default())?;
    std::fs::create_dir_all(fs::get_progress_dir(root))?;
    Ok(true)
}
