//! Filesystem operations
//!
//! Handles directory creation, file reads and the map catalog load.

use std::path::Path;

use crate::core::catalog::MapCatalog;
use crate::error::{FilesystemError, RotationAppError};

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read and validate the map catalog at `path`
pub fn load_catalog(path: &Path) -> Result<MapCatalog, RotationAppError> {
    let content = read_file(path)?;
    let catalog = MapCatalog::from_json(&content)?;
    tracing::info!("Loaded {} maps from {}", catalog.len(), path.display());
    Ok(catalog)
}
