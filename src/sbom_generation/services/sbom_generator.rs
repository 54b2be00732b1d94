use crate::sbom_generation::domain::SbomMetadata;
use chrono::{Local, SecondsFormat, Utc};
use uuid::Uuid;

/// Vendor recorded in the CycloneDX tool metadata
pub const TOOL_VENDOR: &str = "carbonetes";

/// Tool name recorded in the CycloneDX tool metadata
pub const TOOL_NAME: &str = "diggity";

/// SbomGenerator service for generating per-render document metadata
///
/// Each call produces a fresh random serial number, so two renders of the
/// same canonical list differ only in serial number and timestamp.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_vendor` - Vendor of the tool generating the SBOM
    /// * `tool_name` - Name of the tool
    ///
    /// # Returns
    /// SbomMetadata with a local RFC 3339 timestamp and a bare v4 UUID
    pub fn generate_metadata(tool_vendor: &str, tool_name: &str) -> SbomMetadata {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let serial_number = Uuid::new_v4().to_string();

        SbomMetadata::new(
            timestamp,
            tool_vendor.to_string(),
            tool_name.to_string(),
            serial_number,
        )
    }

    /// Generates SBOM metadata with the default tool information
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_VENDOR, TOOL_NAME)
    }

    /// Current UTC time in RFC 3339 form (`Z` suffix), used by SPDX `Created`
    pub fn utc_timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_generate_metadata() {
        let metadata = SbomGenerator::generate_metadata("test-vendor", "test-tool");

        assert_eq!(metadata.tool_vendor(), "test-vendor");
        assert_eq!(metadata.tool_name(), "test-tool");
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = SbomGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_vendor(), "carbonetes");
        assert_eq!(metadata.tool_name(), "diggity");
    }

    #[test]
    fn test_generate_metadata_timestamp_is_rfc3339() {
        let metadata = SbomGenerator::generate_default_metadata();
        assert!(DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_utc_timestamp_has_zulu_suffix() {
        let timestamp = SbomGenerator::utc_timestamp();
        assert!(timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }

    #[test]
    fn test_generate_metadata_unique_serial_numbers() {
        let metadata1 = SbomGenerator::generate_default_metadata();
        let metadata2 = SbomGenerator::generate_default_metadata();

        assert_ne!(metadata1.serial_number(), metadata2.serial_number());
    }

    #[test]
    fn test_generate_metadata_serial_is_bare_v4_uuid() {
        let metadata = SbomGenerator::generate_default_metadata();
        let serial = metadata.serial_number();

        assert!(!serial.starts_with("urn:uuid:"));
        let parsed = Uuid::parse_str(serial).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(serial.len(), 36);
    }
}
