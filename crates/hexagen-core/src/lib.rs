//! hexagen core - hexagonal .NET solution generation.
//!
//! This crate provides the domain and application layers of the generator,
//! following the same ports-and-adapters split as the solutions it emits.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           hexagen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SolutionDriver, ProjectEmitter,        │
//! │  TemplateWriter)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Toolchain, Catalogue,      │
//! │  ProgressSink)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      hexagen-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!
//!        Domain (pure): Layer, LayerGraph, PackageManifest,
//!        Solution, TemplateArtifact, ToolchainCommand
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hexagen_core::prelude::*;
//!
//! let mut driver = SolutionDriver::new(filesystem, toolchain, catalogue);
//! let solution = driver.run(&SolutionParams::new("Acme", "./out"))?;
//! assert_eq!(solution.len(), 8);
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, DriverState, SolutionDriver,
        ports::{ArtifactCatalogue, Filesystem, ProgressEvent, ProgressSink, SilentProgress, Toolchain},
    };
    pub use crate::domain::{
        BuildUnitKind, DomainError, Framework, Layer, LayerGraph, PackageManifest, Project,
        Solution, SolutionContext, SolutionName, SolutionParams, TemplateArtifact, Tier,
        ToolchainCommand,
    };
    pub use crate::error::{ErrorCategory, HexagenError, HexagenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
