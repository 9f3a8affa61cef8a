//! # dsinit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the scaffolder, each adding path
//! context to its errors:
//! - **`ensure_dir_exists`**: `mkdir -p` that treats an existing directory as
//!   success and an existing non-directory as an error.
//! - **`is_dir_empty`**: reports whether a directory has no entries at all.
//! - **`touch_file`**: creates an empty file, leaving an existing one alone.
//! - **`write_string_to_file`**: writes (overwriting) a file, creating parents.
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating any
/// missing parents.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Returns `true` when the directory has no entries, hidden ones included.
///
/// # Errors
///
/// Returns an `Err` if the directory cannot be read.
pub fn is_dir_empty(path: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(path).with_context(|| format!("Failed to read directory {:?}", path))?;
    Ok(entries.next().is_none())
}

/// Creates an empty file at `path` if nothing is there yet.
pub fn touch_file(path: &Path) -> Result<()> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to create file {:?}", path))?;
    debug!("Touched file: {:?}", path);
    Ok(())
}

/// Writes string content to a file path, overwriting if it exists. The parent
/// directory is created first when missing.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write
/// fails (e.g., permissions, disk full).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
