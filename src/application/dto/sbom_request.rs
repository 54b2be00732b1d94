use std::path::PathBuf;

/// SbomRequest - Request DTO for the finalization use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the JSON scan report produced upstream
    pub scan_path: PathBuf,
}

impl SbomRequest {
    pub fn new(scan_path: PathBuf) -> Self {
        Self { scan_path }
    }
}
