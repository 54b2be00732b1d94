use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::Package;
use crate::sbom_generation::services::spdx_mapping;
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    spdx_version: &'static str,
    creation_info: CreationInfo,
    data_license: &'static str,
    document_namespace: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    packages: Vec<SpdxPackage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
    license_list_version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    download_location: String,
    license_concluded: String,
    license_declared: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
    files_analyzed: bool,
    homepage: String,
    originator: String,
    source_info: String,
    version_info: String,
    copyright_text: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: String,
    reference_locator: String,
    reference_type: String,
}

/// SpdxJsonFormatter adapter for generating SPDX 2.2 JSON
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_package(&self, package: &Package) -> SpdxPackage {
        let licenses = spdx_mapping::licenses_declared(package);

        SpdxPackage {
            spdx_id: spdx_mapping::spdx_id(package),
            name: package.name.clone(),
            description: package.description.clone(),
            download_location: spdx_mapping::download_location(package),
            license_concluded: licenses.clone(),
            license_declared: licenses,
            external_refs: spdx_mapping::external_refs(package)
                .into_iter()
                .map(|r| ExternalRef {
                    reference_category: r.category,
                    reference_locator: r.locator,
                    reference_type: r.reference_type,
                })
                .collect(),
            files_analyzed: false,
            homepage: spdx_mapping::homepage(package),
            originator: spdx_mapping::originator(package),
            source_info: spdx_mapping::source_info(package),
            version_info: package.version.clone(),
            copyright_text: spdx_mapping::NO_ASSERTION,
        }
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let name = spdx_mapping::document_name(&model.source);

        let document = Document {
            spdx_id: spdx_mapping::DOCUMENT_ID,
            document_namespace: spdx_mapping::document_namespace(&name),
            name,
            spdx_version: spdx_mapping::SPDX_VERSION,
            creation_info: CreationInfo {
                created: SbomGenerator::utc_timestamp(),
                creators: spdx_mapping::creators(),
                license_list_version: spdx_mapping::LICENSE_LIST_VERSION,
            },
            data_license: spdx_mapping::DATA_LICENSE,
            packages: model
                .packages_by_name()
                .into_iter()
                .map(|p| self.build_package(p))
                .collect(),
        };

        serde_json::to_string_pretty(&document)
            .map_err(|e| SbomError::serialization("spdx-json", e).into())
    }
}
