use crate::sbom_generation::domain::{Distro, Package};

/// SbomResponse - Result of finalizing one scan report
///
/// `packages` is the canonical list: deduplicated, merged and sorted. It is
/// read-only from here on.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Image reference or directory that was scanned
    pub source: String,
    /// Canonical packages, sorted by name then version
    pub packages: Vec<Package>,
    /// Host distribution, when the scanner found one
    pub distro: Option<Distro>,
    /// Non-fatal scanner warnings, reported after rendering
    pub warnings: Vec<String>,
}

impl SbomResponse {
    pub fn new(
        source: String,
        packages: Vec<Package>,
        distro: Option<Distro>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            source,
            packages,
            distro,
            warnings,
        }
    }
}
