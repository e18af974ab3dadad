//! Toolchain invocations as plain values.
//!
//! A [`ToolchainCommand`] says what to run and where, nothing more. The
//! `Toolchain` port executes it; the recording adapter stores it; the CLI
//! prints it in dry-run mode.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::SolutionContext,
    topology::LayerGraph,
    value_objects::{BuildUnitKind, Layer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCommand {
    /// `new sln -n {name} -o {output}`
    NewSolution { name: String, output: PathBuf },

    /// `new {classlib|webapi|xunit} -n {name} -o {output} -f {framework}`
    NewProject {
        kind: BuildUnitKind,
        name: String,
        output: PathBuf,
        framework: String,
    },

    /// `sln {solution_file} add {project_file}`, run from the solution root.
    AddToSolution {
        solution_root: PathBuf,
        solution_file: String,
        project_file: PathBuf,
    },

    /// `add package {package}`, run from the project directory.
    AddPackage { project_dir: PathBuf, package: String },

    /// `add reference {reference}`, run from the project directory.
    AddReference {
        project_dir: PathBuf,
        reference: PathBuf,
    },
}

impl ToolchainCommand {
    pub fn new_solution(ctx: &SolutionContext) -> Self {
        Self::NewSolution {
            name: ctx.name().to_string(),
            output: ctx.root(),
        }
    }

    pub fn new_project(ctx: &SolutionContext, layer: Layer) -> Self {
        Self::NewProject {
            kind: LayerGraph::build_unit(layer),
            name: ctx.qualified_name(layer),
            output: ctx.project_dir(layer),
            framework: ctx.framework().to_string(),
        }
    }

    /// The project file is given relative to the solution root.
    pub fn add_to_solution(ctx: &SolutionContext, layer: Layer) -> Self {
        let qualified = ctx.qualified_name(layer);
        Self::AddToSolution {
            solution_root: ctx.root(),
            solution_file: ctx.solution_file_name(),
            project_file: Path::new(&qualified).join(format!("{qualified}.csproj")),
        }
    }

    pub fn add_package(ctx: &SolutionContext, layer: Layer, package: impl Into<String>) -> Self {
        Self::AddPackage {
            project_dir: ctx.project_dir(layer),
            package: package.into(),
        }
    }

    pub fn add_reference(ctx: &SolutionContext, from: Layer, to: Layer) -> Self {
        Self::AddReference {
            project_dir: ctx.project_dir(from),
            reference: ctx.sibling_project_file(to),
        }
    }

    /// Arguments after the program name.
    pub fn args(&self) -> Vec<OsString> {
        match self {
            Self::NewSolution { name, output } => vec![
                "new".into(),
                "sln".into(),
                "-n".into(),
                name.into(),
                "-o".into(),
                output.into(),
            ],
            Self::NewProject {
                kind,
                name,
                output,
                framework,
            } => vec![
                "new".into(),
                kind.template_name().into(),
                "-n".into(),
                name.into(),
                "-o".into(),
                output.into(),
                "-f".into(),
                framework.into(),
            ],
            Self::AddToSolution {
                solution_file,
                project_file,
                ..
            } => vec![
                "sln".into(),
                solution_file.into(),
                "add".into(),
                project_file.into(),
            ],
            Self::AddPackage { package, .. } => {
                vec!["add".into(), "package".into(), package.into()]
            }
            Self::AddReference { reference, .. } => {
                vec!["add".into(), "reference".into(), reference.into()]
            }
        }
    }

    /// Directory the command must run in; `None` inherits the caller's.
    pub fn working_dir(&self) -> Option<&Path> {
        match self {
            Self::NewSolution { .. } | Self::NewProject { .. } => None,
            Self::AddToSolution { solution_root, .. } => Some(solution_root),
            Self::AddPackage { project_dir, .. } | Self::AddReference { project_dir, .. } => {
                Some(project_dir)
            }
        }
    }

    /// Short label for logs and progress output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NewSolution { .. } => "new-solution",
            Self::NewProject { .. } => "new-project",
            Self::AddToSolution { .. } => "add-to-solution",
            Self::AddPackage { .. } => "add-package",
            Self::AddReference { .. } => "add-reference",
        }
    }
}

/// Space-joined argument list; arguments containing whitespace are quoted.
impl fmt::Display for ToolchainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let arg = arg.to_string_lossy();
            if arg.chars().any(char::is_whitespace) {
                write!(f, "\"{arg}\"")?;
            } else {
                f.write_str(&arg)?;
            }
        }
        Ok(())
    }
}
