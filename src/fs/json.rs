//! JSON file operations
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{Result, TabloError};
use crate::schemas::{Config, WorkflowState};

use super::paths::{get_config_path, get_state_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TabloError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            TabloError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TabloError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Writes to a temp file and renames it over the target, so readers never see
/// a partial record.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| TabloError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read a progress record; `None` if the user has not started the workflow.
pub fn read_state(root: &Path, user_id: u64, gallery_id: u64) -> Result<Option<WorkflowState>> {
    let path = get_state_path(root, user_id, gallery_id);
    match read_json(&path) {
        Ok(state) => Ok(Some(state)),
        Err(TabloError::FileNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a progress record.
pub fn write_state(root: &Path, state: &WorkflowState) -> Result<()> {
    let path = get_state_path(root, state.user_id, state.gallery_id);
    write_json(&path, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<WorkflowState> = read_json(&path);
        assert!(matches!(result.unwrap_err(), TabloError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<WorkflowState> = read_json(&path);
        assert!(matches!(result.unwrap_err(), TabloError::InvalidJson(_)));
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("state.json");

        write_json(&path, &WorkflowState::new(1, 2)).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_state_missing_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(read_state(temp.path(), 1, 2).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read_state() {
        let temp = TempDir::new().unwrap();
        let state = WorkflowState::new(7, 42);

        write_state(temp.path(), &state).unwrap();

        let read = read_state(temp.path(), 7, 42).unwrap().unwrap();
        assert_eq!(read, state);
    }
}
