use crate::ports::outbound::{ScanReader, ScanReport};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading JSON scan reports
///
/// This adapter implements the ScanReader port. Reports are read with the
/// same guards applied to every input file: no symbolic links, regular
/// files only, and a size ceiling.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the security checks pass
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReader for FileSystemReader {
    fn read_scan(&self, path: &Path) -> Result<ScanReport> {
        if !path.exists() {
            return Err(SbomError::ScanReportNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content =
            self.safe_read_file(path, "scan report")
                .map_err(|e| SbomError::ScanReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;

        let report: ScanReport =
            serde_json::from_str(&content).map_err(|e| SbomError::ScanParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            packages = report.packages.len(),
            has_distro = report.distro.is_some(),
            "loaded scan report"
        );

        Ok(report)
    }
}
