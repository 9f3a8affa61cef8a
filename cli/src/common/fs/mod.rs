//! # dsinit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the scaffolder:
//!
//! - **`copy`**: verbatim single-file copy via `fs_extra`.
//! - **`io`**: directory creation, emptiness checks, marker files and writes.
//!
//! Callers import the submodule they need, e.g. `crate::common::fs::io`.
//!

/// Contains the file copy helper (`copy_file`).
pub mod copy;
/// Contains basic file I/O operations (`ensure_dir_exists`, `is_dir_empty`, `touch_file`, `write_string_to_file`).
pub mod io;
