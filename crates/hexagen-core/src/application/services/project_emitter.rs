//! Project Emitter - creates and wires one project per layer.
//!
//! The sequence for a layer is fixed:
//! 1. Create the project directory (left alone when present)
//! 2. Scaffold the build unit
//! 3. Add it to the solution
//! 4. Attach packages in manifest order
//! 5. Attach references in graph order, unless the layer is a source
//!
//! Nothing is retried. The first failing invocation aborts the layer.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProgressEvent, ProgressSink, Toolchain},
    domain::{Layer, LayerGraph, PackageManifest, Project, SolutionContext, ToolchainCommand},
    error::HexagenResult,
};

pub struct ProjectEmitter<'a> {
    filesystem: &'a dyn Filesystem,
    toolchain: &'a dyn Toolchain,
    progress: &'a dyn ProgressSink,
}

impl<'a> ProjectEmitter<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        toolchain: &'a dyn Toolchain,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            filesystem,
            toolchain,
            progress,
        }
    }

    #[instrument(skip_all, fields(solution = %ctx.name(), layer = %layer))]
    pub fn create_project(&self, ctx: &SolutionContext, layer: Layer) -> HexagenResult<Project> {
        let mut project = Project::new(ctx, layer);
        self.progress.step(&ProgressEvent::CreatingProject {
            qualified_name: project.qualified_name().to_string(),
        });

        if self.filesystem.exists(project.path()) {
            debug!(path = %project.path().display(), "Project directory already exists");
        } else {
            self.filesystem.create_dir_all(project.path())?;
        }

        self.run(&ToolchainCommand::new_project(ctx, layer))?;
        self.run(&ToolchainCommand::add_to_solution(ctx, layer))?;

        self.attach_packages(ctx, &mut project)?;
        if !LayerGraph::is_source(layer) {
            self.attach_references(ctx, &mut project)?;
        }

        info!(
            project = %project.qualified_name(),
            kind = %project.kind(),
            packages = project.packages().len(),
            references = project.references().len(),
            "Project created"
        );
        Ok(project)
    }

    fn attach_packages(&self, ctx: &SolutionContext, project: &mut Project) -> HexagenResult<()> {
        let packages = PackageManifest::packages(project.layer());
        self.progress.step(&ProgressEvent::AddingPackages {
            qualified_name: project.qualified_name().to_string(),
            count: packages.len(),
        });

        for package in packages {
            self.run(&ToolchainCommand::add_package(ctx, project.layer(), *package))?;
            project.record_package(*package);
        }
        Ok(())
    }

    fn attach_references(&self, ctx: &SolutionContext, project: &mut Project) -> HexagenResult<()> {
        let edges = LayerGraph::edges(project.layer());
        self.progress.step(&ProgressEvent::AddingReferences {
            qualified_name: project.qualified_name().to_string(),
            count: edges.len(),
        });

        for target in edges {
            self.run(&ToolchainCommand::add_reference(ctx, project.layer(), *target))?;
            project.record_reference(*target);
        }
        Ok(())
    }

    fn run(&self, command: &ToolchainCommand) -> HexagenResult<()> {
        debug!(step = command.label(), %command, "Running toolchain");
        self.toolchain.run(command)
    }
}
