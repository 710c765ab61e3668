//! Init command - Create the .tablo directory

use std::path::Path;

use crate::config::init_config;
use crate::errors::Result;
use crate::fs::{get_tablo_dir, resolve_cwd};

/// Initialize a store in the working directory
pub fn run(cwd: Option<&Path>, force: bool) -> Result<bool> {
    let root = resolve_cwd(cwd);
    if init_config(&root, force)? {
        tracing::info!("Initialized {}", get_tablo_dir(&root).display());
    } else {
        tracing::warn!(
            "{} already exists; use --force to reset the config",
            get_tablo_dir(&root).display()
        );
    }
    Ok(true)
}
