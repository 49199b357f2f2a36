//! JSON export of the in-memory collection
//!
//! Exports the whole collection in its current order, including rows hidden
//! by the active filter. The source document is never touched.

use std::path::{Path, PathBuf};

use crate::error::{Result, TipboardError};
use crate::tip::Tip;

/// Fixed name of the export file
pub const EXPORT_FILE_NAME: &str = "tips-export.json";

/// Serialize tips as 2-space indented JSON
pub fn to_json(tips: &[Tip]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tips)?)
}

/// Write [`EXPORT_FILE_NAME`] into `dir` and return its path
pub async fn export_to(tips: &[Tip], dir: &Path) -> Result<PathBuf> {
    let json = to_json(tips)?;
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        TipboardError::Export(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(EXPORT_FILE_NAME);
    tokio::fs::write(&path, json.as_bytes()).await.map_err(|e| {
        TipboardError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), tips = tips.len(), "exported tips");
    Ok(path)
}
