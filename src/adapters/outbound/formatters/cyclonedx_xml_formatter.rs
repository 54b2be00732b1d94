use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{Component, SbomMetadata};
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use quick_xml::se::Serializer;
use serde::Serialize;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const XMLNS: &str = "http://cyclonedx.org/schema/bom/1.4";
const FORMAT_NAME: &str = "cyclonedx-xml";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@serialNumber")]
    serial_number: String,
    #[serde(rename = "@version")]
    version: u32,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Components>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Tools,
}

#[derive(Debug, Serialize)]
struct Tools {
    tool: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct Components {
    component: Vec<XmlComponent>,
}

#[derive(Debug, Serialize)]
struct XmlComponent {
    #[serde(rename = "@bom-ref", skip_serializing_if = "String::is_empty")]
    bom_ref: String,
    #[serde(rename = "@type")]
    component_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Licenses>,
    #[serde(skip_serializing_if = "String::is_empty")]
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    external_references: Option<ExternalReferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Properties>,
}

#[derive(Debug, Serialize)]
struct Licenses {
    license: Vec<XmlLicense>,
}

#[derive(Debug, Serialize)]
struct XmlLicense {
    id: String,
}

#[derive(Debug, Serialize)]
struct ExternalReferences {
    reference: Vec<Reference>,
}

#[derive(Debug, Serialize)]
struct Reference {
    #[serde(rename = "@type")]
    reference_type: String,
    url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    comment: String,
}

#[derive(Debug, Serialize)]
struct Properties {
    property: Vec<XmlProperty>,
}

#[derive(Debug, Serialize)]
struct XmlProperty {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text")]
    value: String,
}

/// CycloneDxXmlFormatter adapter for generating CycloneDX 1.4 XML
///
/// This adapter implements the SbomFormatter port for CycloneDX XML. Every
/// render draws a fresh serial number and timestamp.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_bom(&self, model: &SbomReadModel, metadata: &SbomMetadata) -> Bom {
        let components: Vec<XmlComponent> =
            model.components.iter().map(Self::build_component).collect();

        Bom {
            xmlns: XMLNS,
            serial_number: metadata.serial_number().to_string(),
            version: 1,
            metadata: Metadata {
                timestamp: metadata.timestamp().to_string(),
                tools: Tools {
                    tool: vec![Tool {
                        vendor: metadata.tool_vendor().to_string(),
                        name: metadata.tool_name().to_string(),
                    }],
                },
            },
            components: (!components.is_empty()).then_some(Components {
                component: components,
            }),
        }
    }

    fn build_component(component: &Component) -> XmlComponent {
        let licenses = component
            .licenses
            .as_ref()
            .filter(|licenses| !licenses.is_empty())
            .map(|licenses| Licenses {
                license: licenses
                    .iter()
                    .map(|license| XmlLicense {
                        id: license.id.clone(),
                    })
                    .collect(),
            });

        let external_references = component
            .external_references
            .as_ref()
            .filter(|references| !references.is_empty())
            .map(|references| ExternalReferences {
                reference: references
                    .iter()
                    .map(|reference| Reference {
                        reference_type: reference.reference_type.clone(),
                        url: reference.url.clone(),
                        comment: reference.comment.clone(),
                    })
                    .collect(),
            });

        let properties = (!component.properties.is_empty()).then(|| Properties {
            property: component
                .properties
                .iter()
                .map(|property| XmlProperty {
                    name: property.name.clone(),
                    value: property.value.clone(),
                })
                .collect(),
        });

        XmlComponent {
            bom_ref: component.bom_ref.clone(),
            component_type: component.component_type.as_str(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: component.description.clone(),
            licenses,
            purl: component.purl.clone(),
            external_references,
            properties,
        }
    }

    fn serialize(&self, bom: &Bom) -> Result<String> {
        let mut body = String::new();
        let mut serializer =
            Serializer::with_root(&mut body, Some("bom")).map_err(serialization_error)?;
        serializer.indent(' ', 1);
        bom.serialize(serializer).map_err(serialization_error)?;

        Ok(format!("{}\n{}\n", XML_HEADER, body))
    }
}

fn serialization_error(error: impl std::fmt::Display) -> SbomError {
    SbomError::serialization(FORMAT_NAME, error)
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxXmlFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let metadata = SbomGenerator::generate_default_metadata();
        let bom = self.build_bom(model, &metadata);
        self.serialize(&bom)
    }
}
