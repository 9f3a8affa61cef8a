//! # dsinit Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Command implementations reachable from `main.rs`. dsinit has a single
//! command, so there is no subcommand layer: `main` flattens
//! `scaffold::ScaffoldArgs` into its own argument struct.
//!

/// Creates a new project: directory skeleton plus README, .gitignore, .env.example and notebook.
pub mod scaffold;
