use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{self, SbomMetadata};
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "bom-ref", skip_serializing_if = "String::is_empty")]
    bom_ref: String,
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<License>,
    #[serde(skip_serializing_if = "String::is_empty")]
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    id: String,
}

#[derive(Debug, Serialize)]
struct ExternalReference {
    url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    comment: String,
    #[serde(rename = "type")]
    reference_type: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxJsonFormatter adapter for generating CycloneDX 1.4 JSON
///
/// Carries the same component graph as the XML rendering; the serial
/// number uses the `urn:uuid:` form expected in JSON documents.
pub struct CycloneDxJsonFormatter;

impl CycloneDxJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(&self, metadata: &SbomMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: vec![Tool {
                vendor: metadata.tool_vendor().to_string(),
                name: metadata.tool_name().to_string(),
            }],
        }
    }

    fn build_component(&self, component: &domain::Component) -> Component {
        Component {
            bom_ref: component.bom_ref.clone(),
            component_type: component.component_type.as_str(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: component.description.clone(),
            licenses: component
                .licenses
                .iter()
                .flatten()
                .map(|license| License {
                    license: LicenseContent {
                        id: license.id.clone(),
                    },
                })
                .collect(),
            purl: component.purl.clone(),
            external_references: component
                .external_references
                .iter()
                .flatten()
                .map(|reference| ExternalReference {
                    url: reference.url.clone(),
                    comment: reference.comment.clone(),
                    reference_type: reference.reference_type.clone(),
                })
                .collect(),
            properties: component
                .properties
                .iter()
                .map(|property| Property {
                    name: property.name.clone(),
                    value: property.value.clone(),
                })
                .collect(),
        }
    }
}

impl Default for CycloneDxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxJsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let metadata = SbomGenerator::generate_default_metadata();

        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.4",
            serial_number: format!("urn:uuid:{}", metadata.serial_number()),
            version: 1,
            metadata: self.build_metadata(&metadata),
            components: model
                .components
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        };

        serde_json::to_string_pretty(&bom)
            .map_err(|e| SbomError::serialization("cyclonedx-json", e).into())
    }
}
