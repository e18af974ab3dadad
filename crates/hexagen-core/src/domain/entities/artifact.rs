//! Template artifacts and their rendering context.
//!
//! An artifact is one boilerplate source file the generator writes into a
//! project after the toolchain has scaffolded it. Bodies are plain text with
//! `{{VARIABLE}}` placeholders; the catalogue that owns the bodies lives in the
//! adapters crate, the rules about what a body may reference live here.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::domain::{
    entities::SolutionContext, error::DomainError, topology::LayerGraph, value_objects::Layer,
};

/// Placeholder that expands to the solution name.
pub const SOLUTION_NAME_VAR: &str = "SOLUTION_NAME";

/// Placeholder that expands to the target framework moniker.
pub const FRAMEWORK_VAR: &str = "FRAMEWORK";

/// One boilerplate file destined for a single layer's project.
///
/// `path` is relative to the project directory and always uses `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArtifact {
    pub id: &'static str,
    pub layer: Layer,
    pub path: &'static str,
    pub body: &'static str,

    /// Toolchain-generated file this artifact supersedes, deleted before
    /// the artifact is written.
    pub replaces: Option<&'static str>,
}

impl TemplateArtifact {
    pub const fn new(
        id: &'static str,
        layer: Layer,
        path: &'static str,
        body: &'static str,
    ) -> Self {
        Self {
            id,
            layer,
            path,
            body,
            replaces: None,
        }
    }

    pub const fn replacing(mut self, path: &'static str) -> Self {
        self.replaces = Some(path);
        self
    }

    /// `path` as a platform path.
    pub fn relative_path(&self) -> PathBuf {
        Self::to_platform(self.path)
    }

    /// Absolute destination inside the solution.
    pub fn destination(&self, ctx: &SolutionContext) -> PathBuf {
        ctx.project_dir(self.layer).join(self.relative_path())
    }

    /// Location of the superseded toolchain file, if any.
    pub fn replaced_file(&self, ctx: &SolutionContext) -> Option<PathBuf> {
        self.replaces
            .map(|p| ctx.project_dir(self.layer).join(Self::to_platform(p)))
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        ctx.render(self.body)
    }

    /// Layers named by `{{SOLUTION_NAME}}.<Layer>` occurrences in the body.
    pub fn referenced_layers(&self) -> Result<BTreeSet<Layer>, DomainError> {
        let marker = format!("{{{{{SOLUTION_NAME_VAR}}}}}.");
        let mut layers = BTreeSet::new();

        let mut rest = self.body;
        while let Some(start) = rest.find(&marker) {
            rest = &rest[start + marker.len()..];
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            let segment = &rest[..end];

            let layer =
                Layer::from_project_suffix(segment).ok_or_else(|| DomainError::InvalidArtifact {
                    artifact: self.id.to_string(),
                    reason: format!("'{segment}' after the solution name is not a project suffix"),
                })?;
            layers.insert(layer);
        }

        Ok(layers)
    }

    /// Check the artifact against the layer graph.
    ///
    /// The path must be a non-empty relative path without `..`; the body must
    /// be non-empty; every layer it names must be its own or a reference edge
    /// of its own.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidArtifact {
            artifact: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id cannot be empty"));
        }
        for path in std::iter::once(self.path).chain(self.replaces) {
            if path.trim().is_empty() {
                return Err(invalid("path cannot be empty"));
            }
            if path.starts_with('/') || path.contains('\\') {
                return Err(invalid("path must be relative and use '/'"));
            }
            if path.split('/').any(|c| c == ".." || c.is_empty()) {
                return Err(invalid("path cannot contain '..' or empty components"));
            }
        }
        if self.body.trim().is_empty() {
            return Err(invalid("body cannot be empty"));
        }

        for referenced in self.referenced_layers()? {
            if referenced != self.layer && !LayerGraph::references(self.layer, referenced) {
                return Err(DomainError::UndeclaredLayerReference {
                    artifact: self.id.to_string(),
                    layer: self.layer.to_string(),
                    referenced: referenced.to_string(),
                });
            }
        }

        Ok(())
    }

    fn to_platform(path: &str) -> PathBuf {
        path.split('/').collect()
    }
}

/// Variables available to artifact bodies.
///
/// | Variable        | Example          |
/// |-----------------|------------------|
/// | `SOLUTION_NAME` | `Acme`           |
/// | `FRAMEWORK`     | `netcoreapp3.1`  |
///
/// Unknown placeholders are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(ctx: &SolutionContext) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(SOLUTION_NAME_VAR.to_string(), ctx.name().to_string());
        variables.insert(FRAMEWORK_VAR.to_string(), ctx.framework().to_string());
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` with its value.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SolutionParams;

    fn ctx() -> SolutionContext {
        SolutionContext::from_params(&SolutionParams::new("Acme", "out")).unwrap()
    }

    const STARTUP: TemplateArtifact = TemplateArtifact::new(
        "webapi-startup",
        Layer::WebApi,
        "Startup.cs",
        "using {{SOLUTION_NAME}}.IoC;\n\nnamespace {{SOLUTION_NAME}}.WebAPI\n{\n}\n",
    );

    #[test]
    fn render_substitutes_name_and_framework() {
        let rc = RenderContext::new(&ctx());
        assert_eq!(rc.get(SOLUTION_NAME_VAR), Some("Acme"));
        assert_eq!(
            rc.render("{{SOLUTION_NAME}}.Domain targets {{FRAMEWORK}}"),
            "Acme.Domain targets netcoreapp3.1"
        );
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let rc = RenderContext::new(&ctx());
        assert_eq!(rc.render("{{OTHER}}"), "{{OTHER}}");
        assert_eq!(rc.with_variable("OTHER", "x").render("{{OTHER}}"), "x");
    }

    #[test]
    fn destination_is_inside_the_layer_project() {
        let artifact = TemplateArtifact::new(
            "controller",
            Layer::WebApi,
            "Controllers/v1/WeatherForecastController.cs",
            "namespace {{SOLUTION_NAME}}.WebAPI.Controllers.v1 {}",
        )
        .replacing("Controllers/WeatherForecastController.cs");

        let ctx = ctx();
        let project = ctx.project_dir(Layer::WebApi);
        assert_eq!(
            artifact.destination(&ctx),
            project
                .join("Controllers")
                .join("v1")
                .join("WeatherForecastController.cs")
        );
        assert_eq!(
            artifact.replaced_file(&ctx),
            Some(project.join("Controllers").join("WeatherForecastController.cs"))
        );
    }

    #[test]
    fn referenced_layers_are_collected_from_the_body() {
        let layers = STARTUP.referenced_layers().unwrap();
        assert_eq!(layers.into_iter().collect::<Vec<_>>(), [Layer::IoC, Layer::WebApi]);
    }

    #[test]
    fn references_along_edges_validate() {
        STARTUP.validate().unwrap();
    }

    #[test]
    fn reference_against_the_graph_is_rejected() {
        let artifact = TemplateArtifact::new(
            "bad-model",
            Layer::Domain,
            "Models/Client.cs",
            "using {{SOLUTION_NAME}}.Dapper.Maps;\nnamespace {{SOLUTION_NAME}}.Domain.Models {}",
        );
        let err = artifact.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::UndeclaredLayerReference {
                artifact: "bad-model".into(),
                layer: "Domain".into(),
                referenced: "Dapper".into(),
            }
        );
    }

    #[test]
    fn unknown_segment_after_solution_name_is_rejected() {
        let artifact = TemplateArtifact::new(
            "typo",
            Layer::Domain,
            "Models/Client.cs",
            "namespace {{SOLUTION_NAME}}.Domian.Models {}",
        );
        assert!(matches!(
            artifact.validate(),
            Err(DomainError::InvalidArtifact { .. })
        ));
    }

    #[test]
    fn role_aliases_and_wrong_case_are_not_project_suffixes() {
        for body in [
            "using {{SOLUTION_NAME}}.Presentation;",
            "using {{SOLUTION_NAME}}.ioc;",
            "using {{SOLUTION_NAME}}.DataAccess;",
            "using {{SOLUTION_NAME}}.WebApi;",
        ] {
            let artifact = TemplateArtifact::new("alias", Layer::Tests, "AliasTests.cs", body);
            assert!(
                matches!(artifact.validate(), Err(DomainError::InvalidArtifact { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn escaping_paths_are_rejected() {
        for path in ["../Other.cs", "/abs.cs", "a//b.cs", "a\\b.cs", " "] {
            let artifact =
                TemplateArtifact::new("p", Layer::Domain, path, "namespace {{SOLUTION_NAME}}.Domain {}");
            assert!(artifact.validate().is_err(), "{path} should be rejected");
        }
    }
}
