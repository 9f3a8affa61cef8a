//! # dsinit Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the optional configuration that tunes the generated
//! `.env.example`. Every setting has a built-in default that reproduces the
//! stock template, so dsinit works identically with no configuration at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (replaces 2 and 3, must exist)
//! 2. Project-specific `.dsinit.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/dsinit/config.toml`
//! 4. Default values defined in the code
//!
//! Paths are tilde-expanded and the merged result is validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [env]
//! data_path = "./data/raw"
//! random_seed = 42
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let seed = cfg.env.random_seed;
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration every run works with.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub env: EnvTemplateConfig,
}

/// Values substituted into the generated `.env.example`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvTemplateConfig {
    /// Written as `DATA_PATH`. Relative to the generated project root.
    pub data_path: String,
    /// Written as `RANDOM_SEED`.
    pub random_seed: u64,
}

impl Default for EnvTemplateConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            random_seed: default_random_seed(),
        }
    }
}

fn default_data_path() -> String {
    "./data/raw".to_string()
}
fn default_random_seed() -> u64 {
    42
}

/// One configuration file as written on disk. A `None` field was not set in
/// that file, which is what lets a higher-precedence file override a lower
/// one even with a value equal to the built-in default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    env: EnvSection,
}

/// The `[env]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct EnvSection {
    data_path: Option<String>,
    random_seed: Option<u64>,
}

impl ConfigFile {
    /// Fills every unset field with its built-in default.
    fn resolve(self) -> Config {
        Config {
            env: EnvTemplateConfig {
                data_path: self.env.data_path.unwrap_or_else(default_data_path),
                random_seed: self.env.random_seed.unwrap_or_else(default_random_seed),
            },
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".dsinit.toml";

/// Loads, merges, expands and validates configuration.
///
/// With `explicit` set, only that file is read (it must exist). Otherwise the
/// user file and the nearest project file are merged over the defaults.
///
/// # Errors
///
/// Returns an `Err` if a configuration file cannot be read or parsed, if the
/// explicit file is missing, or if the merged result fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let file_config = match explicit {
        // `--config` replaces the file-based sources entirely.
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
            if !expanded.is_file() {
                anyhow::bail!(ScaffoldError::Config(format!(
                    "Configuration file '{}' does not exist",
                    expanded.display()
                )));
            }
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        // Otherwise the project file is layered over the user file.
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    // Defaults fill whatever no file set, then paths are expanded and checked.
    let mut config = file_config.resolve();
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    // `ProjectDirs` is `None` when no home directory can be determined.
    if let Some(proj_dirs) = ProjectDirs::from("", "", "dsinit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.dsinit.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        // A repository root bounds the search.
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        // `parent()` is `None` at the filesystem root, ending the walk.
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Every field the project file sets wins over the user file.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> ConfigFile {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    ConfigFile {
        env: EnvSection {
            data_path: project_cfg.env.data_path.or(user.env.data_path),
            random_seed: project_cfg.env.random_seed.or(user.env.random_seed),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.env.data_path = shellexpand::tilde(&config.env.data_path).into_owned();
    debug!("Expanded data path: {}", config.env.data_path);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.env.data_path.trim().is_empty() {
        return Err(anyhow!(ScaffoldError::Config(
            "env.data_path must not be empty".to_string()
        )));
    }
    // A newline would split the DATA_PATH line of `.env.example`.
    if config.env.data_path.contains('\n') {
        return Err(anyhow!(ScaffoldError::Config(format!(
            "env.data_path must be a single line, got {:?}",
            config.env.data_path
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
