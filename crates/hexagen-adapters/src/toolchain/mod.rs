//! Toolchain adapters.

mod dotnet;
mod recording;

pub use dotnet::DotnetToolchain;
pub use recording::RecordingToolchain;
