//! Application layer for hexagen.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (SolutionDriver, ProjectEmitter,
//!   TemplateWriter)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain but holds no rules itself.
//! Topology and naming rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DriverState, ProjectEmitter, SolutionDriver, TemplateWriter};

pub use ports::{
    ArtifactCatalogue, Filesystem, ProgressEvent, ProgressSink, SilentProgress, Toolchain,
};

pub use error::ApplicationError;
