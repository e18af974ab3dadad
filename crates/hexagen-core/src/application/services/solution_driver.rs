//! Solution Driver - main application orchestrator.
//!
//! Walks the generation pipeline as a forward-only state machine:
//!
//! ```text
//! Uninitialized ─create_solution─▶ SolutionCreated ─create_projects─▶ ProjectsCreated
//!       ─emit_templates─▶ TemplatesEmitted ─finish─▶ Done
//! ```
//!
//! A step called out of order fails with `InvalidTransition` and does
//! nothing. A step that fails leaves the state at the last completed one;
//! whatever it already wrote stays on disk.

use std::fmt;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactCatalogue, Filesystem, ProgressEvent, ProgressSink, SilentProgress, Toolchain},
        services::{ProjectEmitter, TemplateWriter},
    },
    domain::{
        DomainValidator as validator, LayerGraph, Solution, SolutionParams, TemplateArtifact,
        ToolchainCommand,
    },
    error::{HexagenError, HexagenResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    SolutionCreated,
    ProjectsCreated,
    TemplatesEmitted,
    Done,
}

impl DriverState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::SolutionCreated => "solution-created",
            Self::ProjectsCreated => "projects-created",
            Self::TemplatesEmitted => "templates-emitted",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct SolutionDriver {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
    catalogue: Box<dyn ArtifactCatalogue>,
    progress: Box<dyn ProgressSink>,
    state: DriverState,
    solution: Option<Solution>,
    artifacts: Vec<TemplateArtifact>,
}

impl SolutionDriver {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn Toolchain>,
        catalogue: Box<dyn ArtifactCatalogue>,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            catalogue,
            progress: Box::new(SilentProgress),
            state: DriverState::Uninitialized,
            solution: None,
            artifacts: Vec::new(),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The solution built so far, once the solution step has completed.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Run every step and return the finished solution.
    #[instrument(skip_all, fields(name = ?params.name, directory = ?params.directory))]
    pub fn run(&mut self, params: &SolutionParams) -> HexagenResult<Solution> {
        self.create_solution(params)?;
        self.create_projects()?;
        self.emit_templates()?;
        self.finish()
    }

    /// `Uninitialized → SolutionCreated`.
    ///
    /// All validation happens before the first mutation: parameters, the
    /// layer topology and the artifact catalogue.
    pub fn create_solution(&mut self, params: &SolutionParams) -> HexagenResult<()> {
        self.expect(DriverState::Uninitialized, DriverState::SolutionCreated)?;

        let ctx = validator::validate_params(params)?;
        validator::validate_topology()?;
        let artifacts = self.catalogue.artifacts();
        validator::validate_catalogue(&artifacts)?;

        info!(
            solution = %ctx.name(),
            root = %ctx.root().display(),
            framework = %ctx.framework(),
            "Creating solution"
        );
        self.progress.step(&ProgressEvent::CreatingSolution {
            name: ctx.name().to_string(),
            root: ctx.root(),
        });

        self.filesystem.create_dir_all(&ctx.root())?;
        self.toolchain.run(&ToolchainCommand::new_solution(&ctx))?;

        self.artifacts = artifacts;
        self.solution = Some(Solution::new(ctx));
        self.state = DriverState::SolutionCreated;
        Ok(())
    }

    /// `SolutionCreated → ProjectsCreated`: one project per layer, in
    /// topological order.
    pub fn create_projects(&mut self) -> HexagenResult<()> {
        self.expect(DriverState::SolutionCreated, DriverState::ProjectsCreated)?;

        let emitter = ProjectEmitter::new(
            self.filesystem.as_ref(),
            self.toolchain.as_ref(),
            self.progress.as_ref(),
        );
        let solution = self.solution.as_mut().ok_or_else(missing_solution)?;

        for layer in LayerGraph::topological_order() {
            let project = emitter.create_project(solution.context(), layer)?;
            solution.add_project(project)?;
        }

        self.state = DriverState::ProjectsCreated;
        Ok(())
    }

    /// `ProjectsCreated → TemplatesEmitted`.
    pub fn emit_templates(&mut self) -> HexagenResult<()> {
        self.expect(DriverState::ProjectsCreated, DriverState::TemplatesEmitted)?;

        let solution = self.solution.as_ref().ok_or_else(missing_solution)?;
        TemplateWriter::new(self.filesystem.as_ref(), self.progress.as_ref())
            .emit(solution.context(), &self.artifacts)?;

        self.state = DriverState::TemplatesEmitted;
        Ok(())
    }

    /// `TemplatesEmitted → Done`. Hands the solution over.
    pub fn finish(&mut self) -> HexagenResult<Solution> {
        self.expect(DriverState::TemplatesEmitted, DriverState::Done)?;

        let solution = self.solution.take().ok_or_else(missing_solution)?;
        self.progress.step(&ProgressEvent::Finished {
            projects: solution.len(),
            artifacts: self.artifacts.len(),
        });
        info!(solution = %solution.context().name(), "Solution generated");

        self.state = DriverState::Done;
        Ok(solution)
    }

    fn expect(&self, current: DriverState, next: DriverState) -> Result<(), ApplicationError> {
        if self.state == current {
            Ok(())
        } else {
            Err(ApplicationError::InvalidTransition {
                from: self.state.as_str(),
                to: next.as_str(),
            })
        }
    }
}

fn missing_solution() -> HexagenError {
    HexagenError::Internal {
        message: "driver state advanced without a solution".into(),
    }
}
