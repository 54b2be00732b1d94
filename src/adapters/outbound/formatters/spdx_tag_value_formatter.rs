use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::Package;
use crate::sbom_generation::services::spdx_mapping;
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::Result;

/// SpdxTagValueFormatter adapter for generating SPDX 2.2 tag-value text
///
/// The layout is line oriented and every line, including the last one, is
/// newline terminated. Packages appear in name order, each introduced by a
/// blank line and a `##### Package:` banner.
pub struct SpdxTagValueFormatter;

impl SpdxTagValueFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_document_header(&self, output: &mut String, name: &str) {
        output.push_str(&format!("SPDXVersion: {}\n", spdx_mapping::SPDX_VERSION));
        output.push_str(&format!("DataLicense: {}\n", spdx_mapping::DATA_LICENSE));
        output.push_str(&format!("SPDXID: {}\n", spdx_mapping::DOCUMENT_ID));
        output.push_str(&format!("DocumentName: {}\n", name));
        output.push_str(&format!(
            "DocumentNamespace: {}\n",
            spdx_mapping::document_namespace(name)
        ));
        output.push_str(&format!(
            "LicenseListVersion: {}\n",
            spdx_mapping::LICENSE_LIST_VERSION
        ));
        for creator in spdx_mapping::creators() {
            output.push_str(&format!("Creator: {}\n", creator));
        }
        output.push_str(&format!("Created: {}\n", SbomGenerator::utc_timestamp()));
    }

    fn render_package(&self, output: &mut String, package: &Package) {
        let licenses = spdx_mapping::licenses_declared(package);

        output.push_str(&format!("\n##### Package: {}\n\n", package.name));
        output.push_str(&format!("PackageName: {}\n", package.name));
        output.push_str(&format!("SPDXID: {}\n", spdx_mapping::spdx_id(package)));
        output.push_str(&format!("PackageVersion: {}\n", package.version));
        output.push_str(&format!(
            "PackageDownloadLocation: {}\n",
            spdx_mapping::download_location(package)
        ));
        output.push_str("FilesAnalyzed: false\n");
        output.push_str(&format!("PackageLicenseConcluded: {}\n", licenses));
        output.push_str(&format!("PackageLicenseDeclared: {}\n", licenses));
        output.push_str(&format!(
            "PackageCopyrightText: {}\n",
            spdx_mapping::NO_ASSERTION
        ));
        for external_ref in spdx_mapping::external_refs(package) {
            output.push_str(&format!(
                "ExternalRef: {} {} {}\n",
                external_ref.category, external_ref.reference_type, external_ref.locator
            ));
        }
    }
}

impl Default for SpdxTagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxTagValueFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let name = spdx_mapping::document_name(&model.source);
        let mut output = String::new();

        self.render_document_header(&mut output, &name);
        for package in model.packages_by_name() {
            self.render_package(&mut output, package);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpine_model() -> SbomReadModel {
        let mut musl = Package::new("musl", "1.2.3-r0", "apk");
        musl.id = "c0de".to_string();
        musl.licenses = vec!["MIT".to_string()];
        musl.cpes = vec!["cpe:2.3:a:musl-libc:musl:1.2.3-r0:*:*:*:*:*:*:*".to_string()];
        musl.purl = "pkg:alpine/musl@1.2.3-r0".to_string();

        let mut busybox = Package::new("busybox", "1.35.0-r17", "apk");
        busybox.id = "b00b".to_string();

        SbomReadModel {
            source: "alpine:3.16".to_string(),
            packages: vec![musl, busybox],
            ..SbomReadModel::default()
        }
    }

    fn render(model: &SbomReadModel) -> String {
        SpdxTagValueFormatter::new().format(model).unwrap()
    }

    #[test]
    fn test_document_header_lines() {
        let output = render(&SbomReadModel::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "SPDXVersion: SPDX-2.2");
        assert_eq!(lines[1], "DataLicense: CC0-1.0");
        assert_eq!(lines[2], "SPDXID: SPDXRef-DOCUMENT");
        assert_eq!(lines[3], "DocumentName: unknown");
        assert!(lines[4]
            .starts_with("DocumentNamespace: https://console.carbonetes.com/diggity/image/unknown-"));
        assert_eq!(lines[5], "LicenseListVersion: 3.16");
        assert_eq!(lines[6], "Creator: Organization: Carbonetes");
        assert_eq!(lines[7], "Creator: Tool: diggity");
        assert!(lines[8].starts_with("Created: "));
        assert!(lines[8].ends_with('Z'));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_package_block_layout() {
        let output = render(&alpine_model());

        let expected = "\n##### Package: musl\n\n\
            PackageName: musl\n\
            SPDXID: SPDXRef-c0de\n\
            PackageVersion: 1.2.3-r0\n\
            PackageDownloadLocation: NOASSERTION\n\
            FilesAnalyzed: false\n\
            PackageLicenseConcluded: MIT\n\
            PackageLicenseDeclared: MIT\n\
            PackageCopyrightText: NOASSERTION\n\
            ExternalRef: SECURITY cpe23Type cpe:2.3:a:musl-libc:musl:1.2.3-r0:*:*:*:*:*:*:*\n\
            ExternalRef: PACKAGE-MANAGER purl pkg:alpine/musl@1.2.3-r0\n";

        assert!(output.ends_with(expected));
    }

    #[test]
    fn test_packages_in_name_order() {
        let output = render(&alpine_model());

        let busybox = output.find("##### Package: busybox").unwrap();
        let musl = output.find("##### Package: musl").unwrap();
        assert!(busybox < musl);
    }

    #[test]
    fn test_package_without_licenses_or_refs() {
        let output = render(&alpine_model());

        assert!(output.contains(
            "PackageName: busybox\n\
             SPDXID: SPDXRef-b00b\n\
             PackageVersion: 1.35.0-r17\n\
             PackageDownloadLocation: NOASSERTION\n\
             FilesAnalyzed: false\n\
             PackageLicenseConcluded: NOASSERTION\n\
             PackageLicenseDeclared: NOASSERTION\n\
             PackageCopyrightText: NOASSERTION\n\n"
        ));
    }

    #[test]
    fn test_header_separated_from_first_package_by_blank_line() {
        let output = render(&alpine_model());
        assert!(output.contains("Z\n\n##### Package: busybox\n\nPackageName: busybox\n"));
    }
}
