//! The scaffold pipeline: clone, rewrite, configure, re-initialize.
//!
//! Each stage runs only after the previous one succeeded. A failure stops the run
//! where it is and nothing already on disk is rolled back.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::bootstrap;
use crate::config::Config;
use crate::error::Result;
use crate::fetch;
use crate::name::ProjectName;
use crate::rewrite;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Cloned,
    Rewritten,
    Configured,
    Initialized,
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Cloned => "cloned",
            Self::Rewritten => "rewritten",
            Self::Configured => "configured",
            Self::Initialized => "initialized",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

pub struct Scaffold<'a> {
    config: &'a Config,
    name: ProjectName,
    project_dir: PathBuf,
    stage: Stage,
}

impl<'a> Scaffold<'a> {
    /// Prepares a run that creates `base_dir/<kebab name>`.
    pub fn new(base_dir: &Path, raw_name: &str, config: &'a Config) -> Self {
        let name = ProjectName::new(raw_name);
        let project_dir = base_dir.join(name.kebab());
        Self { config, name, project_dir, stage: Stage::Start }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The last stage that completed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run(&mut self) -> Result<PathBuf> {
        self.pull_template()?;
        self.update_project_name()?;
        self.setup_project()?;
        self.advance(Stage::Done);

        println!("{}", templates::RULE);
        println!("Success! Project created at {}", self.project_dir.display());
        Ok(self.project_dir.clone())
    }

    fn pull_template(&mut self) -> Result<()> {
        println!("Getting template from {}...", self.config.template_url);
        fetch::clone_template(&self.config.git, &self.config.template_url, &self.project_dir)?;
        self.advance(Stage::Cloned);
        Ok(())
    }

    fn update_project_name(&mut self) -> Result<()> {
        println!("Configuring project for CMake...");
        println!("{}", templates::RULE);

        rewrite::rewrite_template_files(&self.project_dir, self.name.snake())?;
        rewrite::remove_vcs_metadata(&self.project_dir)?;

        for path in rewrite::placeholder_residue(&self.project_dir, templates::PLACEHOLDER) {
            warn!("{} still contains {}", path.display(), templates::PLACEHOLDER);
        }

        self.advance(Stage::Rewritten);
        Ok(())
    }

    fn setup_project(&mut self) -> Result<()> {
        bootstrap::configure(&self.project_dir, self.config)?;
        self.advance(Stage::Configured);

        bootstrap::init_repository(&self.config.git, &self.project_dir)?;
        self.advance(Stage::Initialized);
        Ok(())
    }

    fn advance(&mut self, stage: Stage) {
        info!("{}: {} -> {stage}", self.name, self.stage);
        self.stage = stage;
    }
}

/// Scaffolds `raw_name` under `base_dir` and returns the created project directory.
pub fn run(base_dir: &Path, raw_name: &str, config: &Config) -> Result<PathBuf> {
    let mut scaffold = Scaffold::new(base_dir, raw_name, config);
    let result = scaffold.run();

    if let Err(e) = &result {
        debug!("aborted after stage '{}': {e}", scaffold.stage());
    }

    result
}
