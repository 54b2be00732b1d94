/// SbomMetadata value object representing per-render document metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_vendor: String,
    tool_name: String,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_vendor: String,
        tool_name: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_vendor,
            tool_name,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_vendor(&self) -> &str {
        &self.tool_vendor
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Bare UUID (no `urn:uuid:` prefix)
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
