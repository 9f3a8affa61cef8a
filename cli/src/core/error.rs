//! # dsinit Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout dsinit. Domain failures
//! are expressed as `ScaffoldError` variants; everything is carried as an
//! `anyhow::Error` so call sites can attach the path or step that failed.
//!
//! ## Architecture
//!
//! - `ScaffoldError`: a `thiserror` enum for the failures dsinit itself detects
//!   (bad configuration, a target path that is a file, template rendering,
//!   prompt I/O, argument problems).
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! Plain I/O errors from `std::fs` are not wrapped in a variant; they are
//! propagated with `anyhow::Context` naming the path involved.
//!
//! ## Examples
//!
//! ```rust
//! if !root.is_dir() {
//!     anyhow::bail!(ScaffoldError::FileSystem(format!(
//!         "Target path '{}' exists but is not a directory",
//!         root.display()
//!     )));
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for dsinit.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error so context can be attached freely.
pub type Result<T> = anyhow::Result<T>;
