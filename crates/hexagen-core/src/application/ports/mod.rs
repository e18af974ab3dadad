//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the pipeline, implemented by
//!   infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `Toolchain`: the external `dotnet` toolchain
//!   - `ArtifactCatalogue`: boilerplate artifacts to emit
//!   - `ProgressSink`: per-step progress for the user
//!
//! - **Driving (Input) Ports**: `SolutionDriver::run`, called by the CLI.

pub mod output;

pub use output::{
    ArtifactCatalogue, Filesystem, ProgressEvent, ProgressSink, SilentProgress, Toolchain,
};

#[cfg(test)]
pub use output::MockToolchain;
