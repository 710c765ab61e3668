//! Config schema - Tunables of the selection workflow

use serde::{Deserialize, Serialize};

/// Main configuration for the workflow engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Hours after finalize during which a modification request is free
    #[serde(default = "default_free_edit_window_hours")]
    pub free_edit_window_hours: u32,

    /// Maximum number of retouch photos; `null` disables the limit
    #[serde(default = "default_max_retouch_photos")]
    pub max_retouch_photos: Option<usize>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_free_edit_window_hours() -> u32 {
    24
}

fn default_max_retouch_photos() -> Option<usize> {
    Some(5)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            free_edit_window_hours: default_free_edit_window_hours(),
            max_retouch_photos: default_max_retouch_photos(),
        }
    }
}
