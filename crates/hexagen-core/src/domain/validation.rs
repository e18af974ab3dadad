use crate::domain::{
    entities::{SolutionContext, SolutionParams, TemplateArtifact},
    error::DomainError,
    topology::LayerGraph,
};

/// Centralized domain validation.
///
/// Everything here is pure and runs before the first filesystem or
/// toolchain call.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_params(params: &SolutionParams) -> Result<SolutionContext, DomainError> {
        SolutionContext::from_params(params)
    }

    pub fn validate_topology() -> Result<(), DomainError> {
        LayerGraph::validate()
    }

    pub fn validate_artifact(artifact: &TemplateArtifact) -> Result<(), DomainError> {
        artifact.validate()
    }

    /// Validate every artifact, then reject duplicate destinations.
    pub fn validate_catalogue(artifacts: &[TemplateArtifact]) -> Result<(), DomainError> {
        for (i, artifact) in artifacts.iter().enumerate() {
            artifact.validate()?;

            let duplicate = artifacts[..i]
                .iter()
                .any(|a| a.id == artifact.id || (a.layer == artifact.layer && a.path == artifact.path));
            if duplicate {
                return Err(DomainError::InvalidArtifact {
                    artifact: artifact.id.to_string(),
                    reason: "id or destination already used by another artifact".into(),
                });
            }
        }
        Ok(())
    }
}
