//! # dsinit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces used by the scaffold command:
//! - `config`: configuration loading, merging and validation
//! - `error`: error types and the `Result` alias
//! - `templating`: embedded template assets and their rendering
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{Result, ScaffoldError};
//! use crate::core::templating::{Renderer, TemplateFile};
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
