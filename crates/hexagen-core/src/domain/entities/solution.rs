use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    topology::LayerGraph,
    value_objects::{BuildUnitKind, Framework, Layer, SolutionName},
};

/// Raw, unvalidated parameters for a generation run.
///
/// Mirrors the CLI flags one to one; validation happens in
/// [`SolutionContext::from_params`] before anything touches the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionParams {
    pub name: Option<String>,
    pub directory: Option<String>,
    pub framework: Option<String>,
}

impl SolutionParams {
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            directory: Some(directory.into()),
            framework: None,
        }
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }
}

/// Explicit context threaded through every emission step.
///
/// Holds the validated solution name, the target directory the solution
/// folder is created in, and the framework moniker. All paths derive from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionContext {
    name: SolutionName,
    directory: PathBuf,
    framework: Framework,
}

impl SolutionContext {
    pub fn new(name: SolutionName, directory: impl Into<PathBuf>, framework: Framework) -> Self {
        Self {
            name,
            directory: directory.into(),
            framework,
        }
    }

    /// Validate raw parameters. Pure: no filesystem access.
    pub fn from_params(params: &SolutionParams) -> Result<Self, DomainError> {
        let name = SolutionName::parse(params.name.as_deref().unwrap_or_default())?;

        let directory = params
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(DomainError::MissingParameter { field: "directory" })?;

        let framework = Framework::resolve(params.framework.as_deref());

        Ok(Self::new(name, directory, framework))
    }

    pub fn name(&self) -> &SolutionName {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    /// `{directory}/{name}`
    pub fn root(&self) -> PathBuf {
        self.directory.join(self.name.as_str())
    }

    /// `{name}.sln`
    pub fn solution_file_name(&self) -> String {
        format!("{}.sln", self.name)
    }

    /// `{name}.{layer}`
    pub fn qualified_name(&self, layer: Layer) -> String {
        format!("{}.{}", self.name, layer)
    }

    /// `{root}/{name}.{layer}`
    pub fn project_dir(&self, layer: Layer) -> PathBuf {
        self.root().join(self.qualified_name(layer))
    }

    /// `{root}/{name}.{layer}/{name}.{layer}.csproj`
    pub fn project_file(&self, layer: Layer) -> PathBuf {
        self.project_dir(layer).join(Self::project_file_name(&self.qualified_name(layer)))
    }

    /// Path of a sibling project file as seen from inside another project
    /// directory: `../{name}.{layer}/{name}.{layer}.csproj`.
    pub fn sibling_project_file(&self, layer: Layer) -> PathBuf {
        let qualified = self.qualified_name(layer);
        Path::new("..")
            .join(&qualified)
            .join(Self::project_file_name(&qualified))
    }

    fn project_file_name(qualified: &str) -> String {
        format!("{qualified}.csproj")
    }
}

/// One build unit of the solution, bound to exactly one layer.
///
/// Created by the project emitter; the attached packages and references are
/// recorded in attachment order while it wires the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    layer: Layer,
    qualified_name: String,
    path: PathBuf,
    kind: BuildUnitKind,
    packages: Vec<String>,
    references: Vec<Layer>,
}

impl Project {
    pub fn new(ctx: &SolutionContext, layer: Layer) -> Self {
        Self {
            layer,
            qualified_name: ctx.qualified_name(layer),
            path: ctx.project_dir(layer),
            kind: LayerGraph::build_unit(layer),
            packages: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> BuildUnitKind {
        self.kind
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn references(&self) -> &[Layer] {
        &self.references
    }

    pub(crate) fn record_package(&mut self, package: impl Into<String>) {
        self.packages.push(package.into());
    }

    pub(crate) fn record_reference(&mut self, layer: Layer) {
        self.references.push(layer);
    }
}

/// Root container: context plus projects in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    context: SolutionContext,
    projects: Vec<Project>,
}

impl Solution {
    pub fn new(context: SolutionContext) -> Self {
        Self {
            context,
            projects: Vec::new(),
        }
    }

    pub fn context(&self) -> &SolutionContext {
        &self.context
    }

    /// Append a project. Qualified names are unique within a solution.
    pub fn add_project(&mut self, project: Project) -> Result<(), DomainError> {
        if self
            .projects
            .iter()
            .any(|p| p.qualified_name == project.qualified_name)
        {
            return Err(DomainError::DuplicateProject {
                qualified_name: project.qualified_name,
            });
        }
        self.projects.push(project);
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, layer: Layer) -> Option<&Project> {
        self.projects.iter().find(|p| p.layer == layer)
    }

    pub fn contains(&self, layer: Layer) -> bool {
        self.project(layer).is_some()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
