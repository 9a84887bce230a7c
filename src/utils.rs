// ABOUTME: Utility functions for the text-slides application
// ABOUTME: Provides input reading, path validation and directory helpers

use crate::errors::{Result, SlidesError};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SlidesError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SlidesError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Create the parent directory of an output file if it is missing
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    let parent = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    if parent.is_file() {
        return Err(SlidesError::ValidationError(format!(
            "Output directory is a file: {:?}",
            parent
        )));
    }
    std::fs::create_dir_all(parent)?;
    Ok(())
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| {
        SlidesError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}

/// Read a text document from a file, or from stdin when the path is "-"
pub fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        debug!("Reading document from stdin");
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    validate_file_exists(path)?;
    debug!("Reading document from {:?}", path);
    Ok(std::fs::read_to_string(path)?)
}
