//! Template Writer - emits the boilerplate catalogue into the projects.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProgressEvent, ProgressSink},
    domain::{RenderContext, SolutionContext, TemplateArtifact},
    error::HexagenResult,
};

pub struct TemplateWriter<'a> {
    filesystem: &'a dyn Filesystem,
    progress: &'a dyn ProgressSink,
}

impl<'a> TemplateWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, progress: &'a dyn ProgressSink) -> Self {
        Self {
            filesystem,
            progress,
        }
    }

    /// Write every artifact in catalogue order and return the written paths.
    ///
    /// A superseded toolchain file is removed first; missing parent
    /// directories are created. Existing files at the destination are
    /// overwritten.
    #[instrument(skip_all, fields(solution = %ctx.name(), artifacts = artifacts.len()))]
    pub fn emit(
        &self,
        ctx: &SolutionContext,
        artifacts: &[TemplateArtifact],
    ) -> HexagenResult<Vec<PathBuf>> {
        let render_ctx = RenderContext::new(ctx);
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let destination = artifact.destination(ctx);
            self.progress.step(&ProgressEvent::WritingArtifact {
                path: destination.clone(),
            });

            if let Some(replaced) = artifact.replaced_file(ctx) {
                debug!(path = %replaced.display(), "Removing superseded file");
                self.filesystem.remove_file(&replaced)?;
            }

            if let Some(parent) = destination.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem
                .write_file(&destination, &artifact.render(&render_ctx))?;
            debug!(artifact = artifact.id, path = %destination.display(), "Artifact written");
            written.push(destination);
        }

        info!(count = written.len(), "Templates emitted");
        Ok(written)
    }
}
