//! SPDX field mapping
//!
//! Small pure functions shared by the SPDX-JSON and SPDX tag-value
//! renderers. Both formats must agree on every value produced here.

use crate::sbom_generation::domain::Package;
use uuid::Uuid;

pub const SPDX_VERSION: &str = "SPDX-2.2";
pub const DATA_LICENSE: &str = "CC0-1.0";
pub const REF_PREFIX: &str = "SPDXRef-";
pub const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
pub const CREATOR_ORGANIZATION: &str = "Organization: Carbonetes";
pub const CREATOR_TOOL: &str = "Tool: diggity";
pub const LICENSE_LIST_VERSION: &str = "3.16";
pub const NO_ASSERTION: &str = "NOASSERTION";
pub const NAMESPACE_BASE: &str = "https://console.carbonetes.com/diggity/image/";

/// SPDX external reference (`<category> <type> <locator>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRef {
    pub category: String,
    pub reference_type: String,
    pub locator: String,
}

/// Creators listed in every SPDX document
pub fn creators() -> Vec<String> {
    vec![CREATOR_ORGANIZATION.to_string(), CREATOR_TOOL.to_string()]
}

/// Document name derived from the scan source
pub fn document_name(source: &str) -> String {
    if source.is_empty() {
        "unknown".to_string()
    } else {
        source.to_string()
    }
}

/// Unique document namespace; a new UUID is drawn on every call
pub fn document_namespace(name: &str) -> String {
    format!("{}{}-{}", NAMESPACE_BASE, name, Uuid::new_v4())
}

pub fn spdx_id(package: &Package) -> String {
    format!("{}{}", REF_PREFIX, package.id)
}

pub fn download_location(_package: &Package) -> String {
    NO_ASSERTION.to_string()
}

/// Declared licenses joined as an SPDX conjunction
pub fn licenses_declared(package: &Package) -> String {
    if package.licenses.is_empty() {
        return NO_ASSERTION.to_string();
    }
    package.licenses.join(" AND ")
}

/// CPEs as security references, then the PURL as a package-manager reference
pub fn external_refs(package: &Package) -> Vec<ExternalRef> {
    let mut refs: Vec<ExternalRef> = package
        .cpes
        .iter()
        .map(|cpe| ExternalRef {
            category: "SECURITY".to_string(),
            reference_type: "cpe23Type".to_string(),
            locator: cpe.clone(),
        })
        .collect();

    if !package.purl.is_empty() {
        refs.push(ExternalRef {
            category: "PACKAGE-MANAGER".to_string(),
            reference_type: "purl".to_string(),
            locator: package.purl.clone(),
        });
    }

    refs
}

pub fn homepage(_package: &Package) -> String {
    NO_ASSERTION.to_string()
}

pub fn originator(_package: &Package) -> String {
    NO_ASSERTION.to_string()
}

/// Where the package metadata was read from
pub fn source_info(package: &Package) -> String {
    let origin = match package.package_type.as_str() {
        "apk" => "APK DB".to_string(),
        "deb" => "DPKG DB".to_string(),
        "rpm" => "RPM DB".to_string(),
        other => format!("{} metadata", other),
    };

    let paths: Vec<&str> = package
        .locations
        .iter()
        .map(|location| location.path.as_str())
        .collect();

    format!("Information parsed from {}: {}", origin, paths.join(", "))
}
