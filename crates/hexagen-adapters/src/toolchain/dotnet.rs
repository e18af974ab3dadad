//! `dotnet` subprocess adapter.

use std::process::{Command, Stdio};

use hexagen_core::{
    application::{ApplicationError, ports::Toolchain},
    domain::ToolchainCommand,
    error::HexagenResult,
};
use tracing::{debug, instrument};

/// Runs each command as a child process and waits for it.
///
/// Spawn failures map to `ToolchainUnavailable`, non-zero exits to
/// `ToolchainFailed`.
#[derive(Debug, Clone)]
pub struct DotnetToolchain {
    program: String,
    quiet: bool,
}

impl DotnetToolchain {
    pub const DEFAULT_PROGRAM: &'static str = "dotnet";

    pub fn new() -> Self {
        Self::with_program(Self::DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            quiet: false,
        }
    }

    /// Discard the child's stdout.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn build(&self, command: &ToolchainCommand) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(command.args());
        if let Some(dir) = command.working_dir() {
            cmd.current_dir(dir);
        }
        if self.quiet {
            cmd.stdout(Stdio::null());
        }
        cmd
    }
}

impl Default for DotnetToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolchain for DotnetToolchain {
    #[instrument(skip_all, fields(step = command.label()))]
    fn run(&self, command: &ToolchainCommand) -> HexagenResult<()> {
        debug!(program = %self.program, %command, cwd = ?command.working_dir(), "Spawning");

        let status = self.build(command).status().map_err(|e| {
            ApplicationError::ToolchainUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            }
        })?;

        if !status.success() {
            return Err(ApplicationError::ToolchainFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexagen_core::error::HexagenError;
    use std::path::PathBuf;

    fn command() -> ToolchainCommand {
        ToolchainCommand::AddPackage {
            project_dir: PathBuf::from("."),
            package: "Dapper".into(),
        }
    }

    #[test]
    fn missing_program_is_unavailable() {
        let toolchain = DotnetToolchain::with_program("hexagen-no-such-program-xyz");
        let err = toolchain.run(&command()).unwrap_err();
        assert!(matches!(
            err,
            HexagenError::Application(ApplicationError::ToolchainUnavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let err = DotnetToolchain::with_program("false")
            .run(&command())
            .unwrap_err();
        match err {
            HexagenError::Application(ApplicationError::ToolchainFailed { command, code }) => {
                assert_eq!(command, "add package Dapper");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        DotnetToolchain::with_program("true")
            .quiet(true)
            .run(&command())
            .unwrap();
    }

    #[test]
    fn working_directory_is_applied() {
        let cmd = DotnetToolchain::new().build(&command());
        assert_eq!(cmd.get_current_dir(), Some(std::path::Path::new(".")));
        assert_eq!(cmd.get_program(), "dotnet");
    }
}
