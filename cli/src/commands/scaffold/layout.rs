//! # Project Layout
//!
//! File: cli/src/commands/scaffold/layout.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed directory skeleton of a scaffolded project. `build_structure`
//! creates every directory (idempotently), then drops a `.gitkeep` marker into
//! each one that is still empty so version control keeps the path.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories created under every project root, relative to it.
pub const PROJECT_DIRS: [&str; 5] = [
    "data/raw",
    "data/processed",
    "data/submissions",
    "notebooks",
    "src",
];

/// Placeholder file name for otherwise-empty directories.
pub const MARKER_FILE: &str = ".gitkeep";

/// Creates the skeleton under `root` and returns the markers it added.
pub fn build_structure(root: &Path) -> Result<Vec<PathBuf>> {
    for dir in PROJECT_DIRS {
        io::ensure_dir_exists(&root.join(dir))
            .with_context(|| format!("Failed to create project directory '{}'", dir))?;
    }

    let mut markers = Vec::new();
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        if io::is_dir_empty(&path)? {
            let marker = path.join(MARKER_FILE);
            io::touch_file(&marker)?;
            markers.push(marker);
        } else {
            debug!("'{}' already has content, no marker needed", path.display());
        }
    }
    Ok(markers)
}
