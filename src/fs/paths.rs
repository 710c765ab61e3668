//! Path resolution utilities
//!
//! Provides functions to locate the store root and construct paths to the
//! config and progress files.
//!
//! Layout:
//! ```text
//! <root>/.tablo/config.json
//! <root>/.tablo/progress/<gallery_id>/<user_id>.json
//! ```

use std::path::{Path, PathBuf};

use crate::errors::{Result, TabloError};

/// Find the nearest ancestor of `start_cwd` containing a `.tablo` directory.
///
/// # Errors
/// * `NotFound` - If no ancestor contains `.tablo`
pub fn find_store_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| TabloError::NotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_tablo_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(TabloError::NotFound(
                    "Could not find a .tablo directory; run `tablo init` first".to_string(),
                ));
            }
        }
    }
}

/// Resolve the working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .tablo directory.
pub fn get_tablo_dir(root: &Path) -> PathBuf {
    root.join(".tablo")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_tablo_dir(root).join("config.json")
}

/// Get the path to the progress directory.
pub fn get_progress_dir(root: &Path) -> PathBuf {
    get_tablo_dir(root).join("progress")
}

/// Get the path to a gallery's progress directory.
pub fn get_gallery_dir(root: &Path, gallery_id: u64) -> PathBuf {
    get_progress_dir(root).join(gallery_id.to_string())
}

/// Get the path to one user's progress record in a gallery.
pub fn get_state_path(root: &Path, user_id: u64, gallery_id: u64) -> PathBuf {
    get_gallery_dir(root, gallery_id).join(format!("{}.json", user_id))
}
