//! Core domain layer for hexagen.
//!
//! Pure logic only: the fixed layer topology, the solution model, template
//! artifacts and toolchain command descriptions. No filesystem access and no
//! subprocesses; those live behind the ports in `crate::application`.

pub mod entities;
pub mod error;
pub mod toolchain;
pub mod topology;
pub mod value_objects;

mod validation;

pub use entities::{
    FRAMEWORK_VAR, Project, RenderContext, SOLUTION_NAME_VAR, Solution, SolutionContext,
    SolutionParams, TemplateArtifact,
};
pub use error::{DomainError, ErrorCategory};
pub use toolchain::ToolchainCommand;
pub use topology::{LAYER_REGISTRY, LayerDef, LayerGraph, PackageManifest};
pub use validation::DomainValidator;
pub use value_objects::{BuildUnitKind, Framework, Layer, SolutionName, Tier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_rejects_blank_name_before_anything_else() {
        let params = SolutionParams {
            name: Some(String::new()),
            directory: None,
            framework: None,
        };
        assert_eq!(
            DomainValidator::validate_params(&params).unwrap_err(),
            DomainError::MissingParameter { field: "name" }
        );
    }

    #[test]
    fn solution_name_accepts_dotted_identifiers() {
        for name in ["Acme", "Acme.Billing", "_internal", "Shop2"] {
            assert!(SolutionName::parse(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn solution_name_rejects_non_identifiers() {
        for name in ["my app", "a/b", "a\\b", ".hidden", "trailing.", "a..b", "9lives", "my-app"] {
            let err = SolutionName::parse(name).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InputValidation, "{name}");
        }
    }

    #[test]
    fn solution_name_is_trimmed() {
        assert_eq!(SolutionName::parse("  Acme ").unwrap().as_str(), "Acme");
    }

    #[test]
    fn layer_parsing_is_case_insensitive() {
        assert_eq!("webapi".parse::<Layer>().unwrap(), Layer::WebApi);
        assert_eq!("WebAPI".parse::<Layer>().unwrap(), Layer::WebApi);
        assert_eq!("IOC".parse::<Layer>().unwrap(), Layer::IoC);
        assert_eq!(Layer::WebApi.to_string(), "WebAPI");
    }

    #[test]
    fn project_suffix_lookup_is_exact() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_project_suffix(layer.as_str()), Some(layer));
        }
        assert_eq!(Layer::from_project_suffix("webapi"), None);
        assert_eq!(Layer::from_project_suffix("Presentation"), None);
    }

    #[test]
    fn framework_falls_back_to_default() {
        assert_eq!(Framework::resolve(None).as_str(), "netcoreapp3.1");
        assert_eq!(Framework::resolve(Some("")).as_str(), "netcoreapp3.1");
        assert_eq!(Framework::resolve(Some(" net6.0 ")).as_str(), "net6.0");
    }

    #[test]
    fn catalogue_with_duplicate_destination_is_rejected() {
        let body = "namespace {{SOLUTION_NAME}}.Domain.Models {}";
        let artifacts = [
            TemplateArtifact::new("a", Layer::Domain, "Models/Client.cs", body),
            TemplateArtifact::new("b", Layer::Domain, "Models/Client.cs", body),
        ];
        assert!(DomainValidator::validate_catalogue(&artifacts).is_err());
        assert!(DomainValidator::validate_catalogue(&artifacts[..1]).is_ok());
    }
}
