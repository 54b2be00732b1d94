use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{ProgressReporter, ScanReader};
use crate::sbom_generation::services::ResultFinalizer;
use crate::shared::Result;

/// GenerateSbomUseCase - Loads a scan report and finalizes its packages
///
/// This use case orchestrates the finalization workflow using generic
/// dependency injection for its infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - ScanReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<SR, PR> {
    scan_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> GenerateSbomUseCase<SR, PR>
where
    SR: ScanReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(scan_reader: SR, progress_reporter: PR) -> Self {
        Self {
            scan_reader,
            progress_reporter,
        }
    }

    /// Executes the finalization use case
    ///
    /// # Arguments
    /// * `request` - Location of the scan report
    ///
    /// # Returns
    /// SbomResponse holding the canonical package list, the distro and the
    /// scanner's warnings
    ///
    /// # Errors
    /// Returns an error if the scan report cannot be read or decoded
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            request.scan_path.display()
        ));

        let report = self.scan_reader.read_scan(&request.scan_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package observation(s)",
            report.packages.len()
        ));

        self.progress_reporter
            .start_activity("🔍 Finalizing package inventory...");

        let packages = ResultFinalizer::finalize(report.packages);

        self.progress_reporter.report_completion(&format!(
            "✅ Finalized {} unique package(s)",
            packages.len()
        ));

        Ok(SbomResponse::new(
            report.source,
            packages,
            report.distro,
            report.errors,
        ))
    }
}
