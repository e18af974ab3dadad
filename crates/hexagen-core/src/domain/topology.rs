//! Layer topology registry.
//!
//! # Design Rationale
//!
//! Every fact about a layer (its tier, the build unit it scaffolds, the
//! packages it pulls in and the layers it references) is described exactly
//! once by a [`LayerDef`] row. [`LayerGraph`] and [`PackageManifest`] are
//! thin views over [`LAYER_REGISTRY`]; the wiring code in the application
//! layer never matches on layer names.
//!
//! Rows are in creation order. A layer may only reference rows above it,
//! which [`LayerGraph::validate`] checks.

use crate::domain::error::DomainError;
use crate::domain::value_objects::{BuildUnitKind, Layer, Tier};

// ── Package lists ────────────────────────────────────────────────────────────

const BASIC_PACKAGES: &[&str] = &[
    "AutoMapper",
    "Microsoft.Extensions.DependencyInjection.Abstractions",
    "Microsoft.Extensions.Logging.Abstractions",
];

const DAPPER_PACKAGES: &[&str] = &[
    "AutoMapper",
    "Dapper",
    "Dapper.FluentMap",
    "Dapper.FluentMap.Dommel",
    "Microsoft.Extensions.DependencyInjection.Abstractions",
    "Microsoft.Extensions.Logging.Abstractions",
    "Microsoft.Extensions.Configuration",
    "System.Data.SqlClient",
];

const EXTERNAL_SERVICES_PACKAGES: &[&str] = &[
    "AutoMapper",
    "Microsoft.Extensions.DependencyInjection.Abstractions",
    "Microsoft.Extensions.Logging.Abstractions",
    "Microsoft.Extensions.Http",
];

const IOC_PACKAGES: &[&str] = &[
    "AutoMapper.Extensions.Microsoft.DependencyInjection",
    "Microsoft.Extensions.Http",
    "Serilog.Enrichers.Environment",
    "Serilog.Extensions.Logging",
    "Serilog.Sinks.MSSqlServer",
    "Swashbuckle.AspNetCore.SwaggerGen",
    "Dapper",
    "Dapper.FluentMap",
    "Dapper.FluentMap.Dommel",
    "Microsoft.Extensions.Configuration",
];

const WEB_API_PACKAGES: &[&str] = &[
    "Microsoft.AspNetCore.Mvc.Versioning",
    "Microsoft.Extensions.DependencyInjection.Abstractions",
    "Microsoft.VisualStudio.Web.CodeGeneration.Design",
    "Swashbuckle.AspNetCore.Swagger",
    "Swashbuckle.AspNetCore.SwaggerGen",
    "Swashbuckle.AspNetCore.SwaggerUI",
];

const TESTS_PACKAGES: &[&str] = &[
    "AutoFixture",
    "AutoMapper",
    "MockQueryable.Core",
    "MockQueryable.Moq",
    "Moq",
    "Serilog.Enrichers.Environment",
    "Serilog.Sinks.MSSqlServer",
    "ServiceStack.OrmLite.Sqlite",
    "SQLite",
];

// ── Registry ─────────────────────────────────────────────────────────────────

/// Everything the pipeline needs to know about one layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerDef {
    pub layer: Layer,
    pub tier: Tier,
    pub build_unit: BuildUnitKind,

    /// Package identifiers, attached in this order.
    pub packages: &'static [&'static str],

    /// Referenced layers, attached in this order. Empty for source layers.
    pub references: &'static [Layer],
}

/// Single source of truth for the solution topology, in creation order.
///
/// Row `i` describes `Layer::ALL[i]`.
pub static LAYER_REGISTRY: [LayerDef; Layer::COUNT] = [
    LayerDef {
        layer: Layer::Domain,
        tier: Tier::Core,
        build_unit: BuildUnitKind::Library,
        packages: BASIC_PACKAGES,
        references: &[],
    },
    LayerDef {
        layer: Layer::Helpers,
        tier: Tier::Core,
        build_unit: BuildUnitKind::Library,
        packages: BASIC_PACKAGES,
        references: &[],
    },
    LayerDef {
        layer: Layer::Dapper,
        tier: Tier::Infrastructure,
        build_unit: BuildUnitKind::Library,
        packages: DAPPER_PACKAGES,
        references: &[Layer::Domain, Layer::Helpers],
    },
    LayerDef {
        layer: Layer::ExternalServices,
        tier: Tier::Infrastructure,
        build_unit: BuildUnitKind::Library,
        packages: EXTERNAL_SERVICES_PACKAGES,
        references: &[Layer::Domain, Layer::Helpers],
    },
    LayerDef {
        layer: Layer::Application,
        tier: Tier::Application,
        build_unit: BuildUnitKind::Library,
        packages: BASIC_PACKAGES,
        references: &[
            Layer::Domain,
            Layer::Helpers,
            Layer::Dapper,
            Layer::ExternalServices,
        ],
    },
    LayerDef {
        layer: Layer::IoC,
        tier: Tier::CrossCutting,
        build_unit: BuildUnitKind::Library,
        packages: IOC_PACKAGES,
        references: &[
            Layer::Domain,
            Layer::Application,
            Layer::Dapper,
            Layer::ExternalServices,
            Layer::Helpers,
        ],
    },
    LayerDef {
        layer: Layer::WebApi,
        tier: Tier::Presentation,
        build_unit: BuildUnitKind::ServiceEntryPoint,
        packages: WEB_API_PACKAGES,
        references: &[Layer::Domain, Layer::Helpers, Layer::IoC],
    },
    LayerDef {
        layer: Layer::Tests,
        tier: Tier::Tests,
        build_unit: BuildUnitKind::TestSuite,
        packages: TESTS_PACKAGES,
        references: &[
            Layer::Domain,
            Layer::Application,
            Layer::Dapper,
            Layer::ExternalServices,
            Layer::IoC,
            Layer::Helpers,
            Layer::WebApi,
        ],
    },
];

// ── Views ────────────────────────────────────────────────────────────────────

/// Reference edges between layers.
pub struct LayerGraph;

impl LayerGraph {
    pub fn def(layer: Layer) -> &'static LayerDef {
        &LAYER_REGISTRY[layer.index()]
    }

    /// Creation order. Every layer appears after all layers it references.
    pub fn topological_order() -> impl Iterator<Item = Layer> {
        LAYER_REGISTRY.iter().map(|def| def.layer)
    }

    pub fn edges(layer: Layer) -> &'static [Layer] {
        Self::def(layer).references
    }

    pub fn edges_by_name(name: &str) -> Result<&'static [Layer], DomainError> {
        Ok(Self::edges(name.parse()?))
    }

    /// Source layers have no outgoing edges.
    pub fn is_source(layer: Layer) -> bool {
        Self::edges(layer).is_empty()
    }

    pub fn references(from: Layer, to: Layer) -> bool {
        Self::edges(from).contains(&to)
    }

    pub fn build_unit(layer: Layer) -> BuildUnitKind {
        Self::def(layer).build_unit
    }

    pub fn tier(layer: Layer) -> Tier {
        Self::def(layer).tier
    }

    /// Check the registry: rows line up with `Layer::ALL` and every edge
    /// points at a layer created earlier.
    pub fn validate() -> Result<(), DomainError> {
        for (position, def) in LAYER_REGISTRY.iter().enumerate() {
            if def.layer.index() != position {
                return Err(DomainError::InvalidTopology {
                    reason: format!("row {position} describes {}", def.layer),
                });
            }
            for target in def.references {
                if target.index() >= position {
                    return Err(DomainError::ForwardReference {
                        layer: def.layer.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// External packages per layer.
pub struct PackageManifest;

impl PackageManifest {
    pub fn packages(layer: Layer) -> &'static [&'static str] {
        LayerGraph::def(layer).packages
    }

    pub fn packages_by_name(name: &str) -> Result<&'static [&'static str], DomainError> {
        Ok(Self::packages(name.parse()?))
    }
}
