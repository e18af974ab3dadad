pub mod artifact;
pub mod solution;

pub use artifact::{FRAMEWORK_VAR, RenderContext, SOLUTION_NAME_VAR, TemplateArtifact};
pub use solution::{Project, Solution, SolutionContext, SolutionParams};
