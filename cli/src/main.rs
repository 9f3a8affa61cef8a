//! # dsinit Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the dsinit CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Handing off to the scaffold command and reporting its errors
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! dsinit --help
//!
//! # Create ./titanic for a competition
//! dsinit titanic --competition https://www.kaggle.com/competitions/titanic
//!
//! # Same, with debug logging on stderr
//! dsinit -vv titanic
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap (usage errors exit with status 2)
//! 2. Configure logging based on verbosity level
//! 3. Run the scaffolder
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command logic (scaffold)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dsinit",
    about = "Create a new data-science competition project",
    long_about = "Create a new data-science competition project with data/, notebooks/ and src/\n\
                  folders, a README, .gitignore, .env.example and a starter notebook.",
    version
)]
struct Cli {
    #[command(flatten)]
    scaffold: commands::scaffold::ScaffoldArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::scaffold::handle_scaffold(cli.scaffold) {
        tracing::error!("Scaffolding failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
