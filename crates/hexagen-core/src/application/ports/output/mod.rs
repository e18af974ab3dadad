//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! The `hexagen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{TemplateArtifact, ToolchainCommand};
use crate::error::HexagenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexagen_adapters::filesystem::LocalFilesystem` (production)
/// - `hexagen_adapters::filesystem::MemoryFilesystem` (dry runs, testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HexagenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> HexagenResult<()>;

    /// Remove a file. A missing file is not an error.
    fn remove_file(&self, path: &Path) -> HexagenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external project toolchain.
///
/// Implemented by:
/// - `hexagen_adapters::toolchain::DotnetToolchain` (spawns `dotnet`)
/// - `hexagen_adapters::toolchain::RecordingToolchain` (dry runs, testing)
///
/// `run` returns once the invocation has finished.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    fn run(&self, command: &ToolchainCommand) -> HexagenResult<()>;
}

/// Port for the boilerplate catalogue.
pub trait ArtifactCatalogue: Send + Sync {
    /// Artifacts in emission order.
    fn artifacts(&self) -> Vec<TemplateArtifact>;
}

/// One step of the pipeline, reported as it begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    CreatingSolution { name: String, root: PathBuf },
    CreatingProject { qualified_name: String },
    AddingPackages { qualified_name: String, count: usize },
    AddingReferences { qualified_name: String, count: usize },
    WritingArtifact { path: PathBuf },
    Finished { projects: usize, artifacts: usize },
}

impl std::fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreatingSolution { name, root } => {
                write!(f, "Create solution file {name}.sln in {}", root.display())
            }
            Self::CreatingProject { qualified_name } => write!(f, "Create project {qualified_name}"),
            Self::AddingPackages {
                qualified_name,
                count,
            } => write!(f, "Add {count} packages to {qualified_name}"),
            Self::AddingReferences {
                qualified_name,
                count,
            } => write!(f, "Add {count} project references to {qualified_name}"),
            Self::WritingArtifact { path } => write!(f, "Write {}", path.display()),
            Self::Finished {
                projects,
                artifacts,
            } => write!(f, "Generated {projects} projects and {artifacts} files"),
        }
    }
}

/// Port for user-facing progress.
pub trait ProgressSink: Send + Sync {
    fn step(&self, event: &ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn step(&self, _event: &ProgressEvent) {}
}
