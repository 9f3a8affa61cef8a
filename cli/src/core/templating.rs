//! # dsinit Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The four files dsinit writes into a new project come from assets stored in
//! `cli/templates/` and compiled into the binary with `include_str!`. Two of
//! them are interpolated with Tera (`README.md.tera`, `env.example.tera`); the
//! other two (`gitignore`, `exploration.ipynb`) are emitted byte-for-byte.
//!
//! ## Architecture
//!
//! - `TemplateFile` names each generated artifact and knows its relative path.
//! - `ReadmeContext` / `EnvContext` are the serializable variable sets.
//! - `Renderer` owns a `Tera` instance preloaded with the interpolated assets.
//!
//! Autoescaping is disabled: the outputs are Markdown and dotenv text, and
//! URLs must come through unchanged.
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use serde::Serialize;
use std::fmt;
use tera::Tera;
use tracing::debug;

pub const README_TEMPLATE: &str = include_str!("../../templates/README.md.tera");
pub const ENV_EXAMPLE_TEMPLATE: &str = include_str!("../../templates/env.example.tera");
/// Written when the invoking directory has no `.gitignore` of its own.
pub const GITIGNORE_FALLBACK: &str = include_str!("../../templates/gitignore");
pub const EXPLORATION_NOTEBOOK: &str = include_str!("../../templates/exploration.ipynb");

const README_NAME: &str = "README.md";
const ENV_EXAMPLE_NAME: &str = ".env.example";

/// The files generated inside a new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFile {
    Readme,
    Gitignore,
    EnvExample,
    Notebook,
}

impl TemplateFile {
    /// Emission order used by the scaffolder.
    pub const ALL: [TemplateFile; 4] = [
        TemplateFile::Readme,
        TemplateFile::Gitignore,
        TemplateFile::EnvExample,
        TemplateFile::Notebook,
    ];

    /// Output location relative to the project root.
    pub fn relative_path(self) -> &'static str {
        match self {
            TemplateFile::Readme => "README.md",
            TemplateFile::Gitignore => ".gitignore",
            TemplateFile::EnvExample => ".env.example",
            TemplateFile::Notebook => "notebooks/exploration.ipynb",
        }
    }

    /// How the file is named in progress output.
    pub fn label(self) -> &'static str {
        match self {
            TemplateFile::Notebook => "starter notebook",
            other => other.relative_path(),
        }
    }
}

impl fmt::Display for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

#[derive(Serialize, Debug)]
pub struct ReadmeContext<'a> {
    pub project_title: &'a str,
    pub competition_url: &'a str,
}

#[derive(Serialize, Debug)]
pub struct EnvContext<'a> {
    pub competition_name: &'a str,
    pub data_path: &'a str,
    pub random_seed: u64,
}

/// Renders the interpolated template assets.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (README_NAME, README_TEMPLATE),
            (ENV_EXAMPLE_NAME, ENV_EXAMPLE_TEMPLATE),
        ])
        .map_err(|e| {
            anyhow!(ScaffoldError::Template { source: e })
                .context("Failed to load embedded templates")
        })?;
        Ok(Self { tera })
    }

    pub fn render_readme(&self, ctx: &ReadmeContext<'_>) -> Result<String> {
        self.render(README_NAME, ctx)
    }

    pub fn render_env_example(&self, ctx: &EnvContext<'_>) -> Result<String> {
        self.render(ENV_EXAMPLE_NAME, ctx)
    }

    fn render<T: Serialize>(&self, name: &str, ctx: &T) -> Result<String> {
        let tera_context = tera::Context::from_serialize(ctx).map_err(|e| {
            anyhow!(ScaffoldError::Template { source: e })
                .context(format!("Failed to build context for '{}'", name))
        })?;
        let rendered = self
            .tera
            .render(name, &tera_context)
            .map_err(|e| anyhow!(ScaffoldError::Template { source: e }))
            .with_context(|| format!("Tera rendering failed for template '{}'", name))?;
        debug!("Rendered template '{}' ({} bytes)", name, rendered.len());
        Ok(rendered)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_readme() -> Result<()> {
        let renderer = Renderer::new()?;
        let url = "https://www.kaggle.com/competitions/titanic";
        let readme = renderer.render_readme(&ReadmeContext {
            project_title: "Titanic",
            competition_url: url,
        })?;

        assert!(readme.starts_with("# Titanic - Kaggle Competition\n"));
        let link = format!("[{url}]({url})");
        assert_eq!(readme.matches(&link).count(), 2);
        assert!(readme.contains("Competition Link: "));
        assert!(readme.contains("## Results"));
        assert!(readme.contains("## Key Insights"));
        assert!(readme.contains(r".venv\Scripts\activate"));
        assert!(!readme.contains("{{"));
        Ok(())
    }

    #[test]
    fn test_render_readme_does_not_escape() -> Result<()> {
        let renderer = Renderer::new()?;
        let url = "https://example.com/c/a&b?x=<1>";
        let readme = renderer.render_readme(&ReadmeContext {
            project_title: "Odd",
            competition_url: url,
        })?;
        assert!(readme.contains(url));
        Ok(())
    }

    #[test]
    fn test_render_env_example() -> Result<()> {
        let renderer = Renderer::new()?;
        let env = renderer.render_env_example(&EnvContext {
            competition_name: "titanic",
            data_path: "./data/raw",
            random_seed: 42,
        })?;
        assert!(env.contains("KAGGLE_USERNAME=your_kaggle_username\n"));
        assert!(env.contains("KAGGLE_KEY=your_kaggle_api_key\n"));
        assert!(env.contains("COMPETITION_NAME=titanic\n"));
        assert!(env.contains("DATA_PATH=./data/raw\n"));
        assert!(env.contains("RANDOM_SEED=42"));
        Ok(())
    }

    #[test]
    fn test_render_env_example_empty_competition() -> Result<()> {
        let renderer = Renderer::new()?;
        let env = renderer.render_env_example(&EnvContext {
            competition_name: "",
            data_path: "./data/raw",
            random_seed: 42,
        })?;
        assert!(env.lines().any(|line| line == "COMPETITION_NAME="));
        Ok(())
    }

    #[test]
    fn test_gitignore_fallback_patterns() {
        for pattern in [
            "__pycache__/",
            ".venv/",
            ".ipynb_checkpoints",
            "*.csv",
            "*.sqlite3",
            ".DS_Store",
        ] {
            assert!(
                GITIGNORE_FALLBACK.lines().any(|line| line == pattern),
                "missing pattern {pattern}"
            );
        }
    }

    #[test]
    fn test_notebook_is_valid_nbformat() {
        let notebook: serde_json::Value =
            serde_json::from_str(EXPLORATION_NOTEBOOK).expect("notebook must be valid JSON");
        assert_eq!(notebook["nbformat"], 4);

        let cells = notebook["cells"].as_array().expect("cells array");
        let kinds: Vec<&str> = cells
            .iter()
            .map(|c| c["cell_type"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(
            kinds,
            ["markdown", "code", "code", "code", "code", "markdown"]
        );

        let sources: String = cells
            .iter()
            .flat_map(|c| c["source"].as_array().cloned().unwrap_or_default())
            .filter_map(|line| line.as_str().map(str::to_owned))
            .collect();
        assert!(sources.contains("pd.read_csv('../data/raw/train.csv')"));
        assert!(sources.contains("pd.read_csv('../data/raw/test.csv')"));
        assert!(sources.contains("train_df.isna().sum()"));
    }

    #[test]
    fn test_relative_paths() {
        let paths: Vec<&str> = TemplateFile::ALL.iter().map(|t| t.relative_path()).collect();
        assert_eq!(
            paths,
            [
                "README.md",
                ".gitignore",
                ".env.example",
                "notebooks/exploration.ipynb"
            ]
        );
        assert_eq!(TemplateFile::Notebook.to_string(), "notebooks/exploration.ipynb");
        assert_eq!(TemplateFile::Notebook.label(), "starter notebook");
        assert_eq!(TemplateFile::EnvExample.label(), ".env.example");
    }
}
