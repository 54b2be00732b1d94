use diggity_bom::prelude::*;
use std::path::Path;

/// Mock ScanReader for testing
pub struct MockScanReader {
    pub report: ScanReport,
    pub should_fail: bool,
}

impl MockScanReader {
    pub fn new(report: ScanReport) -> Self {
        Self {
            report,
            should_fail: false,
        }
    }

    pub fn with_packages(packages: Vec<Package>) -> Self {
        Self::new(ScanReport {
            packages,
            ..ScanReport::default()
        })
    }

    pub fn with_failure() -> Self {
        Self {
            report: ScanReport::default(),
            should_fail: true,
        }
    }
}

impl ScanReader for MockScanReader {
    fn read_scan(&self, _path: &Path) -> Result<ScanReport> {
        if self.should_fail {
            anyhow::bail!("Mock scan report read failure");
        }
        Ok(self.report.clone())
    }
}
