//! # Template Emitters
//!
//! File: cli/src/commands/scaffold/emitters.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One emitter per generated file. Each writes a single file under the project
//! root and propagates any I/O failure; nothing is cleaned up on error.
//!
//! - **README**: rendered with the project title and competition URL.
//! - **.gitignore**: a verbatim copy of `.gitignore` from the *invocation*
//!   directory when one exists there, else the embedded fallback list.
//! - **.env.example**: rendered with the competition name and the configured
//!   data path and seed.
//! - **Notebook**: the embedded notebook, written as-is.
//!
use super::request::ProjectRequest;
use crate::common::fs::{copy, io};
use crate::core::config::EnvTemplateConfig;
use crate::core::error::Result;
use crate::core::templating::{
    EnvContext, ReadmeContext, Renderer, TemplateFile, EXPLORATION_NOTEBOOK, GITIGNORE_FALLBACK,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything the emitters need besides the project root.
pub struct Emitter<'a> {
    request: &'a ProjectRequest,
    env: &'a EnvTemplateConfig,
    /// Where a user-supplied `.gitignore` is looked for.
    invocation_dir: &'a Path,
    renderer: Renderer,
}

impl<'a> Emitter<'a> {
    pub fn new(
        request: &'a ProjectRequest,
        env: &'a EnvTemplateConfig,
        invocation_dir: &'a Path,
    ) -> Result<Self> {
        Ok(Self {
            request,
            env,
            invocation_dir,
            renderer: Renderer::new()?,
        })
    }

    /// Writes `template` under `root` and returns the written path.
    pub fn emit(&self, template: TemplateFile, root: &Path) -> Result<PathBuf> {
        let target = root.join(template.relative_path());
        match template {
            TemplateFile::Readme => self.emit_readme(&target)?,
            TemplateFile::Gitignore => self.emit_gitignore(&target)?,
            TemplateFile::EnvExample => self.emit_env_example(&target)?,
            TemplateFile::Notebook => io::write_string_to_file(&target, EXPLORATION_NOTEBOOK)?,
        }
        Ok(target)
    }

    fn emit_readme(&self, target: &Path) -> Result<()> {
        let title = self.request.title();
        let content = self.renderer.render_readme(&ReadmeContext {
            project_title: &title,
            competition_url: self.request.competition_url(),
        })?;
        io::write_string_to_file(target, &content)
    }

    fn emit_gitignore(&self, target: &Path) -> Result<()> {
        // The user's own list lives in the invocation directory, not the output one.
        let source = self.invocation_dir.join(".gitignore");
        if source.is_file() {
            info!("Copying existing {} into the project", source.display());
            // A project root equal to the invocation directory is left as-is.
            copy::copy_file(&source, target)?;
            Ok(())
        } else {
            // No user list: fall back to the embedded Python/Jupyter/data patterns.
            info!("No .gitignore in {}, writing the default list", self.invocation_dir.display());
            io::write_string_to_file(target, GITIGNORE_FALLBACK)
        }
    }

    fn emit_env_example(&self, target: &Path) -> Result<()> {
        let content = self.renderer.render_env_example(&EnvContext {
            competition_name: self.request.competition_name(),
            data_path: &self.env.data_path,
            random_seed: self.env.random_seed,
        })?;
        io::write_string_to_file(target, &content)
    }
}
