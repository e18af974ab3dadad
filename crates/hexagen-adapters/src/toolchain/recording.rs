//! Toolchain that records instead of running.

use std::sync::{Arc, Mutex};

use hexagen_core::{
    application::{ApplicationError, ports::Toolchain},
    domain::ToolchainCommand,
    error::HexagenResult,
};
use tracing::trace;

/// Stores every command it is asked to run.
///
/// Used for dry runs and tests. Clones share the record. With
/// [`RecordingToolchain::failing_on`] it fails the n-th call (zero-based)
/// like a toolchain exiting with code 1.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolchain {
    commands: Arc<Mutex<Vec<ToolchainCommand>>>,
    fail_at: Option<usize>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    /// Commands that ran successfully, in order.
    pub fn commands(&self) -> Vec<ToolchainCommand> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl Toolchain for RecordingToolchain {
    fn run(&self, command: &ToolchainCommand) -> HexagenResult<()> {
        let mut commands = self.commands.lock().map_err(|_| ApplicationError::LockPoisoned {
            resource: "recording toolchain",
        })?;

        if self.fail_at == Some(commands.len()) {
            return Err(ApplicationError::ToolchainFailed {
                command: command.to_string(),
                code: Some(1),
            }
            .into());
        }

        trace!(%command, "Recorded");
        commands.push(command.clone());
        Ok(())
    }
}
