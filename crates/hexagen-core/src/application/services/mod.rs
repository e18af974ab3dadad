//! Application services - orchestrate the generation pipeline.
//!
//! `SolutionDriver` owns the ports and sequences the run; `ProjectEmitter`
//! and `TemplateWriter` borrow them for one step each.

pub mod project_emitter;
pub mod solution_driver;
pub mod template_writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use project_emitter::ProjectEmitter;
pub use solution_driver::{DriverState, SolutionDriver};
pub use template_writer::TemplateWriter;
