//! # dsinit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities kept apart from the command logic in `commands::` and the
//! infrastructure in `core::`.
//!
//! - **`fs`**: directory creation, emptiness checks, file writes and copies.
//! - **`ui`**: console interaction (the overwrite confirmation prompt).
//!
//! ```rust
//! use crate::common::{fs, ui};
//!
//! fs::io::ensure_dir_exists(&root.join("data/raw"))?;
//! let proceed = ui::prompts::AssumeYes.confirm("Overwrite? (y/n): ")?;
//! ```
//!

/// Utilities for filesystem operations (I/O, copy).
pub mod fs;
/// Utilities for terminal interaction (prompts).
pub mod ui;
