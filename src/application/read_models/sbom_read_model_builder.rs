//! Builder for constructing SbomReadModel from the finalized result

use super::sbom_read_model::SbomReadModel;
use crate::application::dto::SbomResponse;
use crate::sbom_generation::domain::{Component, Distro, Package};
use crate::sbom_generation::services::{DistroAdapter, IdentifierSynthesis};

/// Builder for constructing SbomReadModel from domain objects
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds the read model from a finalization response
    ///
    /// # Arguments
    /// * `response` - Canonical packages and distro produced by the finalizer
    ///
    /// # Returns
    /// A fully constructed SbomReadModel
    pub fn build(response: &SbomResponse) -> SbomReadModel {
        SbomReadModel {
            source: response.source.clone(),
            packages: response.packages.clone(),
            distro: response.distro.clone(),
            components: Self::build_components(&response.packages, response.distro.as_ref()),
        }
    }

    /// Distro component first (when present), then libraries in canonical order
    fn build_components(packages: &[Package], distro: Option<&Distro>) -> Vec<Component> {
        distro
            .map(DistroAdapter::to_component)
            .into_iter()
            .chain(packages.iter().map(IdentifierSynthesis::to_component))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::ComponentType;

    fn alpine() -> Distro {
        Distro {
            pretty_name: "Alpine Linux v3.16".to_string(),
            name: "Alpine Linux".to_string(),
            id: "alpine".to_string(),
            version_id: "3.16.2".to_string(),
            ..Distro::default()
        }
    }

    fn response(distro: Option<Distro>) -> SbomResponse {
        SbomResponse::new(
            "alpine:3.16".to_string(),
            vec![
                Package::new("busybox", "1.35.0-r17", "apk"),
                Package::new("zlib", "1.2.12-r3", "apk"),
            ],
            distro,
            vec![],
        )
    }

    #[test]
    fn test_build_without_distro() {
        let model = SbomReadModelBuilder::build(&response(None));

        assert_eq!(model.source, "alpine:3.16");
        assert!(model.distro.is_none());
        assert_eq!(model.components.len(), 2);
        assert!(model
            .components
            .iter()
            .all(|c| c.component_type == ComponentType::Library));
        assert_eq!(model.components[0].name, "busybox");
        assert_eq!(model.components[1].name, "zlib");
    }

    #[test]
    fn test_build_puts_distro_first() {
        let model = SbomReadModelBuilder::build(&response(Some(alpine())));

        assert_eq!(model.components.len(), 3);
        assert_eq!(
            model.components[0].component_type,
            ComponentType::OperatingSystem
        );
        assert_eq!(model.components[0].name, "alpine");
        assert_eq!(model.components[1].name, "busybox");
    }

    #[test]
    fn test_build_empty() {
        let empty = SbomResponse::new(String::new(), vec![], None, vec![]);
        let model = SbomReadModelBuilder::build(&empty);

        assert!(model.packages.is_empty());
        assert!(model.components.is_empty());
    }
}
