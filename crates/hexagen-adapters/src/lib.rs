//! Infrastructure adapters for hexagen.
//!
//! This crate implements the ports defined in `hexagen_core::application::ports`.
//! It contains all I/O: the filesystem, the `dotnet` subprocess and the
//! built-in boilerplate catalogue.

pub mod catalogue;
pub mod filesystem;
pub mod toolchain;

// Re-export commonly used adapters
pub use catalogue::BuiltinCatalogue;
pub use filesystem::{FsOperation, LocalFilesystem, MemoryFilesystem};
pub use toolchain::{DotnetToolchain, RecordingToolchain};
