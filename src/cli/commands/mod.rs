//! CLI command implementations

pub mod finalize;
pub mod init;
pub mod navigate;
pub mod select;
pub mod status;

use std::path::Path;

use crate::config::load_config;
use crate::engine::WorkflowEngine;
use crate::errors::{Result, TabloError};
use crate::fs::{find_store_root, resolve_cwd};
use crate::schemas::ActionResponse;
use crate::store::JsonFileStore;

/// Build an engine over the JSON store found from `cwd`
pub fn open_engine(cwd: Option<&Path>) -> Result<WorkflowEngine<JsonFileStore>> {
    let root = find_store_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let engine = WorkflowEngine::new(JsonFileStore::new(root), config);
    tracing::debug!(
        root = %engine.store().root().display(),
        config = ?engine.config(),
        "opened tablo store"
    );
    Ok(engine)
}

/// Print the response as pretty JSON; returns whether the action succeeded
pub fn print_response(response: &ActionResponse) -> Result<bool> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| TabloError::wrap(e, "Failed to serialize response"))?;
    println!("{}", json);
    Ok(response.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::init_config;
    use tempfile::TempDir;

    #[test]
    fn test_open_engine_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        assert!(init_config(temp.path(), false).unwrap());
        let nested = temp.path().join("galleries").join("2026");
        std::fs::create_dir_all(&nested).unwrap();

        let engine = open_engine(Some(&nested)).unwrap();

        assert_eq!(engine.store().root(), temp.path().canonicalize().unwrap());
        assert_eq!(engine.config().free_edit_window_hours, 24);
    }

    #[test]
    fn test_open_engine_without_store() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(open_engine(Some(temp.path())), Err(TabloError::NotFound(_))));
    }
}
