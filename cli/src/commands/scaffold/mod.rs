//! # dsinit Scaffold Command
//!
//! File: cli/src/commands/scaffold/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the one thing dsinit does: create a new
//! data-science competition project. It handles:
//! - Parsing the project name, competition URL and options
//! - Resolving the target directory and confirming an overwrite
//! - Creating the directory skeleton
//! - Emitting README, .gitignore, .env.example and the starter notebook
//! - Printing progress and the next step
//!
//! ## Architecture
//!
//! The flow is strictly sequential; the first failure stops it:
//! 1. Build a `ProjectRequest` (normalized name, URL) and load configuration
//! 2. If the target exists, ask through the injected `Confirm`; a refusal
//!    ends the run before anything is written
//! 3. Create the project root, then the layout (`layout::build_structure`)
//! 4. Emit each `TemplateFile` in order (`emitters::Emitter`)
//! 5. Print the completion message
//!
//! Submodules:
//! - `request`: input normalization and derived values
//! - `layout`: the fixed directory skeleton and marker files
//! - `emitters`: one writer per generated file
//!
//! ## Examples
//!
//! ```bash
//! dsinit titanic --competition https://www.kaggle.com/competitions/titanic
//! dsinit "House Prices" -o ~/kaggle --yes
//! ```
//!
mod emitters;
mod layout;
mod request;

use crate::common::fs::io;
use crate::common::ui::prompts::{AssumeYes, Confirm, ConsolePrompt};
use crate::core::config::{self, Config};
use crate::core::error::{Result, ScaffoldError};
use crate::core::templating::TemplateFile;
use anyhow::Context;
use clap::Args;
use emitters::Emitter;
use request::ProjectRequest;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use walkdir::WalkDir;

/// # Scaffold Arguments (`ScaffoldArgs`)
///
/// Command-line arguments accepted by dsinit.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Name of the project. Lowercased, with spaces replaced by underscores,
    /// it becomes the directory name.
    pub project_name: String,

    /// URL of the competition. Linked from the README; its last path segment
    /// becomes COMPETITION_NAME in .env.example.
    #[arg(long, default_value = "")]
    pub competition: String,

    /// Directory in which to create the project (defaults to the current directory).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Proceed without asking if the project directory already exists.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Read configuration from this file instead of the user/project config files.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Result of a scaffolding run that did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created { root: PathBuf },
    /// The target existed and the user declined to continue.
    Aborted,
}

/// # Handle Scaffold (`handle_scaffold`)
///
/// Entry point called from `main`. Resolves the working and output
/// directories, picks the confirmation source, runs the scaffolder and prints
/// the completion message.
pub fn handle_scaffold(args: ScaffoldArgs) -> Result<()> {
    info!(
        "Scaffolding project '{}' (competition: '{}')",
        args.project_name, args.competition
    );
    let request = ProjectRequest::new(&args.project_name, &args.competition)?;
    let cfg = config::load_config(args.config.as_deref())?;

    let invocation_dir = env::current_dir().context("Failed to get current directory")?;
    let base_dir = resolve_base_dir(&invocation_dir, args.output.as_deref());
    debug!("Base directory: {}", base_dir.display());

    // `--yes` answers the overwrite question without reading stdin.
    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ConsolePrompt::stdio())
    };

    match scaffold_project(&request, &base_dir, &invocation_dir, &cfg, confirm.as_mut())? {
        ScaffoldOutcome::Created { root } => {
            print_completion_message(&root, request.dir_name(), &invocation_dir);
        }
        ScaffoldOutcome::Aborted => info!("Scaffolding aborted by user"),
    }
    Ok(())
}

/// `--output` relative to the invocation directory, with `~` expanded.
fn resolve_base_dir(invocation_dir: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => {
            let expanded = PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).as_ref());
            if expanded.is_absolute() {
                expanded
            } else {
                invocation_dir.join(expanded)
            }
        }
        None => invocation_dir.to_path_buf(),
    }
}

/// Runs the full pipeline for `request` under `base_dir`.
///
/// Nothing is written before the overwrite check passes; after that, no step
/// is rolled back if a later one fails.
///
/// # Arguments
///
/// * `request` - The normalized project name and competition URL.
/// * `base_dir` - Parent directory of the project root.
/// * `invocation_dir` - Where a user `.gitignore` is looked up.
/// * `cfg` - Resolved configuration for the `.env.example` values.
/// * `confirm` - Answers the overwrite question when the root already exists.
///
/// # Returns
///
/// * `Result<ScaffoldOutcome>` - `Created` with the project root, or `Aborted`
///   when the user declined to reuse an existing directory.
///
/// # Errors
///
/// Returns an `Err` if the target exists but is not a directory, or if any
/// directory, marker or generated file cannot be written.
pub fn scaffold_project(
    request: &ProjectRequest,
    base_dir: &Path,
    invocation_dir: &Path,
    cfg: &Config,
    confirm: &mut dyn Confirm,
) -> Result<ScaffoldOutcome> {
    let name = request.dir_name();
    let root = base_dir.join(name);

    // An existing target needs confirmation; a non-directory can never be reused.
    if root.exists() {
        if !root.is_dir() {
            anyhow::bail!(ScaffoldError::FileSystem(format!(
                "Target path '{}' exists but is not a directory",
                root.display()
            )));
        }
        println!("Project directory '{}' already exists.", name);
        // Refusal (or closed input) ends the run before anything is written.
        if !confirm.confirm("Do you want to overwrite it? (y/n): ")? {
            println!("Aborting project creation.");
            return Ok(ScaffoldOutcome::Aborted);
        }
    }

    // Load templates before touching the filesystem so a bad asset writes nothing.
    let emitter = Emitter::new(request, &cfg.env, invocation_dir)?;
    io::ensure_dir_exists(&root)?;

    println!("Creating project structure for '{}'...", name);
    let markers = layout::build_structure(&root)?;
    debug!("Added {} marker file(s)", markers.len());

    // Emission order is fixed; the first failure stops the run without rollback.
    for template in TemplateFile::ALL {
        println!("Creating {}...", template.label());
        emitter
            .emit(template, &root)
            .with_context(|| format!("Failed to create {}", template))?;
    }

    for artifact in list_artifacts(&root) {
        debug!("  {}", artifact.display());
    }
    Ok(ScaffoldOutcome::Created { root })
}

/// Files under `root`, relative to it, in name order.
fn list_artifacts(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

/// # Print Completion Message (`print_completion_message`)
///
/// Success line plus the `cd` command, relative to the invocation directory
/// when possible.
fn print_completion_message(root: &Path, name: &str, invocation_dir: &Path) {
    let display_path = match pathdiff::diff_paths(root, invocation_dir) {
        // The project root is the invocation directory itself.
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        // No relative form (e.g. a different Windows drive): show it as-is.
        None => root.display().to_string(),
    };
    println!("\nProject '{}' created successfully!", name);
    println!(
        "To get started, navigate to the project directory: cd {}",
        display_path
    );
}
