//! Built-in boilerplate catalogue.
//!
//! Bodies live as data files under `templates/` and are compiled into the
//! binary with `include_str!`. Every body is parameterized by
//! `{{SOLUTION_NAME}}`; nothing refers to a concrete solution.
//!
//! # Emission order
//!
//! | #  | Layer            | Path                                                         |
//! |----|------------------|--------------------------------------------------------------|
//! | 1  | IoC              | `Bootstraper.cs`                                             |
//! | 2  | WebAPI           | `Startup.cs`                                                 |
//! | 3  | WebAPI           | `Controllers/v1/WeatherForecastController.cs`                |
//! | 4  | WebAPI           | `Properties/launchSettings.json`                             |
//! | 5  | Domain           | `Enums/EnumDatabaseConnection.cs`                            |
//! | 6  | Domain           | `Models/Client.cs`                                           |
//! | 7  | Dapper           | `Maps/ClientMap.cs`                                          |
//! | 8  | Dapper           | `Factory/IDbConnectionFactory.cs`                            |
//! | 9  | Dapper           | `Factory/DbConnectionFactory.cs`                             |
//! | 10 | Domain           | `Interfaces/Repositories/IUnitOfWork.cs`                     |
//! | 11 | Domain           | `Interfaces/Repositories/ICrudRepository.cs`                 |
//! | 12 | Domain           | `Interfaces/Repositories/IClientRepository.cs`               |
//! | 13 | Dapper           | `Repositories/UnitOfWork.cs`                                 |
//! | 14 | Dapper           | `Repositories/CrudRepository.cs`                             |
//! | 15 | Dapper           | `Repositories/ClientRepository.cs`                           |
//! | 16 | Domain           | `Interfaces/Repositories/ExternalServices/IHTTP.cs`          |
//! | 17 | ExternalServices | `Base/HTTP.cs`                                               |

use hexagen_core::{
    application::ports::ArtifactCatalogue,
    domain::{Layer, TemplateArtifact},
};

macro_rules! template {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file))
    };
}

static BUILTIN_ARTIFACTS: [TemplateArtifact; 17] = [
    TemplateArtifact::new(
        "ioc-bootstraper",
        Layer::IoC,
        "Bootstraper.cs",
        template!("ioc_bootstraper.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "webapi-startup",
        Layer::WebApi,
        "Startup.cs",
        template!("webapi_startup.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "webapi-weather-controller",
        Layer::WebApi,
        "Controllers/v1/WeatherForecastController.cs",
        template!("webapi_weather_controller.cs.tmpl"),
    )
    .replacing("Controllers/WeatherForecastController.cs"),
    TemplateArtifact::new(
        "webapi-launch-settings",
        Layer::WebApi,
        "Properties/launchSettings.json",
        template!("webapi_launch_settings.json.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-enum-database-connection",
        Layer::Domain,
        "Enums/EnumDatabaseConnection.cs",
        template!("domain_enum_database_connection.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-client",
        Layer::Domain,
        "Models/Client.cs",
        template!("domain_client.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-client-map",
        Layer::Dapper,
        "Maps/ClientMap.cs",
        template!("dapper_client_map.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-idb-connection-factory",
        Layer::Dapper,
        "Factory/IDbConnectionFactory.cs",
        template!("dapper_idb_connection_factory.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-db-connection-factory",
        Layer::Dapper,
        "Factory/DbConnectionFactory.cs",
        template!("dapper_db_connection_factory.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-iunit-of-work",
        Layer::Domain,
        "Interfaces/Repositories/IUnitOfWork.cs",
        template!("domain_iunit_of_work.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-icrud-repository",
        Layer::Domain,
        "Interfaces/Repositories/ICrudRepository.cs",
        template!("domain_icrud_repository.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-iclient-repository",
        Layer::Domain,
        "Interfaces/Repositories/IClientRepository.cs",
        template!("domain_iclient_repository.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-unit-of-work",
        Layer::Dapper,
        "Repositories/UnitOfWork.cs",
        template!("dapper_unit_of_work.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-crud-repository",
        Layer::Dapper,
        "Repositories/CrudRepository.cs",
        template!("dapper_crud_repository.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "dapper-client-repository",
        Layer::Dapper,
        "Repositories/ClientRepository.cs",
        template!("dapper_client_repository.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "domain-ihttp",
        Layer::Domain,
        "Interfaces/Repositories/ExternalServices/IHTTP.cs",
        template!("domain_ihttp.cs.tmpl"),
    ),
    TemplateArtifact::new(
        "external-services-http",
        Layer::ExternalServices,
        "Base/HTTP.cs",
        template!("external_services_http.cs.tmpl"),
    ),
];

/// The artifacts that ship with hexagen.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogue;

impl BuiltinCatalogue {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, id: &str) -> Option<&'static TemplateArtifact> {
        BUILTIN_ARTIFACTS.iter().find(|a| a.id == id)
    }
}

impl ArtifactCatalogue for BuiltinCatalogue {
    fn artifacts(&self) -> Vec<TemplateArtifact> {
        BUILTIN_ARTIFACTS.to_vec()
    }
}
