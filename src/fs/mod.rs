//! File system utilities
//!
//! Provides path resolution and JSON file operations backing the file store.

mod json;
mod paths;

pub use json::{read_config, read_json, read_state, write_json, write_state};
pub use paths::{
    find_store_root, get_config_path, get_gallery_dir, get_progress_dir, get_state_path,
    get_tablo_dir, resolve_cwd,
};
