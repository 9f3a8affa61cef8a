//! # dsinit Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Verbatim file copying, used to carry the invoking directory's `.gitignore`
//! into a new project. Backed by `fs_extra` with overwrite enabled so a
//! re-run over an existing project replaces the previous copy.
//!
//! When the source and target resolve to the same file (for example
//! `dsinit .`), nothing is copied: the target already holds the source's
//! bytes, and `std::fs::copy` would truncate it before reading.
//!
use crate::core::error::Result; // Standard Result type from core::error
use anyhow::Context; // For adding context to I/O errors
use std::fs;
use std::path::Path; // Filesystem path type
use tracing::info; // Logging utilities

/// Copies a single file from `source` to `target`, overwriting `target`.
///
/// # Arguments
///
/// * `source` - The file to copy. Must exist.
/// * `target` - Destination path. Replaced if it already exists.
///
/// # Returns
///
/// * `Result<u64>` - The number of bytes copied; `0` when `source` and
///   `target` are the same file and the copy was skipped.
///
/// # Errors
///
/// Returns an `Err` if `source` cannot be read or `target` cannot be written.
pub fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    // Copying a file onto itself would truncate it first.
    if is_same_file(source, target)? {
        info!(
            "Source and target are the same file ({:?}), leaving it untouched",
            source
        );
        return Ok(0);
    }

    // Configure `fs_extra` to replace an existing target.
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;

    let bytes = fs_extra::file::copy(source, target, &options).map_err(|e| {
        // Convert the fs_extra error into an anyhow::Error with the paths involved.
        anyhow::anyhow!(e).context(format!("Failed to copy file {:?} to {:?}", source, target))
    })?;
    info!("Copied {} bytes from {:?} to {:?}", bytes, source, target);
    Ok(bytes)
}

/// Whether both paths resolve to the same file. A missing `target` never does.
fn is_same_file(source: &Path, target: &Path) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }
    let source = fs::canonicalize(source)
        .with_context(|| format!("Failed to resolve path {:?}", source))?;
    let target = fs::canonicalize(target)
        .with_context(|| format!("Failed to resolve path {:?}", target))?;
    Ok(source == target)
}
