//! Domain value objects: Layer, Tier, BuildUnitKind, SolutionName, Framework.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity. They hold NO
//! topology logic: which layer references which, and which packages a layer
//! pulls in, lives in `topology.rs`. This file only defines the types, their
//! string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// One architectural slice of the generated solution.
///
/// The set is closed. Variants are declared in creation (topological) order
/// and `index()` is the row of the layer in `topology::LAYER_REGISTRY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Layer {
    Domain,
    Helpers,
    Dapper,
    ExternalServices,
    Application,
    IoC,
    #[serde(rename = "WebAPI")]
    WebApi,
    Tests,
}

impl Layer {
    pub const COUNT: usize = 8;

    /// Every layer, in creation order.
    pub const ALL: [Layer; Layer::COUNT] = [
        Self::Domain,
        Self::Helpers,
        Self::Dapper,
        Self::ExternalServices,
        Self::Application,
        Self::IoC,
        Self::WebApi,
        Self::Tests,
    ];

    /// Project suffix, as it appears in `{solution}.{layer}`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Helpers => "Helpers",
            Self::Dapper => "Dapper",
            Self::ExternalServices => "ExternalServices",
            Self::Application => "Application",
            Self::IoC => "IoC",
            Self::WebApi => "WebAPI",
            Self::Tests => "Tests",
        }
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Exact inverse of [`Layer::as_str`]; no aliases, case-sensitive.
    pub fn from_project_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.as_str() == suffix)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    /// Case-insensitive; also accepts the architectural role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "domain" => Ok(Self::Domain),
            "helpers" => Ok(Self::Helpers),
            "dapper" | "dataaccess" => Ok(Self::Dapper),
            "externalservices" => Ok(Self::ExternalServices),
            "application" => Ok(Self::Application),
            "ioc" | "crosscutting" => Ok(Self::IoC),
            "webapi" | "presentation" => Ok(Self::WebApi),
            "tests" => Ok(Self::Tests),
            _ => Err(DomainError::UnknownLayer { name: s.to_string() }),
        }
    }
}

// ── Tier ─────────────────────────────────────────────────────────────────────

/// The architectural ring a layer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Core,
    Infrastructure,
    Application,
    CrossCutting,
    Presentation,
    Tests,
}

impl Tier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Infrastructure => "infrastructure",
            Self::Application => "application",
            Self::CrossCutting => "cross-cutting",
            Self::Presentation => "presentation",
            Self::Tests => "tests",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BuildUnitKind ────────────────────────────────────────────────────────────

/// Kind of build unit the toolchain scaffolds for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildUnitKind {
    Library,
    ServiceEntryPoint,
    TestSuite,
}

impl BuildUnitKind {
    /// Short name of the toolchain template (`dotnet new <name>`).
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Library => "classlib",
            Self::ServiceEntryPoint => "webapi",
            Self::TestSuite => "xunit",
        }
    }
}

impl fmt::Display for BuildUnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Library => "library",
            Self::ServiceEntryPoint => "service-entry-point",
            Self::TestSuite => "test-suite",
        })
    }
}

// ── SolutionName ─────────────────────────────────────────────────────────────

/// A validated solution name.
///
/// Invariant: non-blank, made of dot-separated segments that are valid C#
/// identifiers (ASCII letters, digits, `_`, not starting with a digit). The
/// name becomes the root namespace of every generated project and part of
/// every project path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionName(String);

impl SolutionName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::MissingParameter { field: "name" });
        }

        let invalid = |reason: &str| DomainError::InvalidSolutionName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.starts_with('.') || name.ends_with('.') {
            return Err(invalid("name cannot start or end with '.'"));
        }

        for segment in name.split('.') {
            let mut chars = segment.chars();
            match chars.next() {
                None => return Err(invalid("name cannot contain empty segments ('..')")),
                Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                    return Err(invalid("each segment must start with a letter or '_'"));
                }
                Some(_) => {}
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid("only ASCII letters, digits, '_' and '.' are allowed"));
            }
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolutionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// Target framework moniker passed to the toolchain (`-f`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Framework(String);

impl Framework {
    pub const DEFAULT: &'static str = "netcoreapp3.1";

    /// Blank or absent values fall back to [`Framework::DEFAULT`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Framework {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
