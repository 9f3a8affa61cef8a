//! # dsinit UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal interaction helpers. Currently only the confirmation prompt used
//! when a project directory already exists.
//!

/// Injectable yes/no confirmation (`Confirm`, `ConsolePrompt`, `AssumeYes`).
pub mod prompts;
