use crate::sbom_generation::domain::{Distro, Package};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Materialized output of the upstream scanning pipeline
///
/// The walker and the ecosystem parsers have already run; the report holds
/// every raw observation, possibly duplicated across layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanReport {
    /// Image reference or directory that was scanned
    pub source: String,
    pub distro: Option<Distro>,
    pub packages: Vec<Package>,
    /// Non-fatal problems the scanner collected along the way
    pub errors: Vec<String>,
}

/// ScanReader port for loading a scan report
pub trait ScanReader {
    /// Reads and decodes the scan report at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist or cannot be read
    /// - The content is not a valid scan report
    fn read_scan(&self, path: &Path) -> Result<ScanReport>;
}
