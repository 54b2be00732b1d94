/// Output format enumeration for rendered documents
///
/// User input arrives as comma-separated tokens. Each token is resolved once
/// at the boundary through [`FORMAT_ALIASES`]; the rest of the application
/// only deals with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Native JSON (distro and canonical packages)
    Json,
    /// CycloneDX 1.4 XML component graph
    CycloneDxXml,
    /// CycloneDX 1.4 JSON
    CycloneDxJson,
    /// SPDX 2.2 JSON document
    SpdxJson,
    /// SPDX 2.2 tag-value text
    SpdxTagValue,
}

/// Accepted tokens (lower-case) and the format each one selects
pub const FORMAT_ALIASES: &[(&str, OutputFormat)] = &[
    ("json", OutputFormat::Json),
    ("cyclonedx-xml", OutputFormat::CycloneDxXml),
    ("cyclonedxxml", OutputFormat::CycloneDxXml),
    ("cyclonedx", OutputFormat::CycloneDxXml),
    ("cyclone", OutputFormat::CycloneDxXml),
    ("cyclonedx-json", OutputFormat::CycloneDxJson),
    ("cyclonedxjson", OutputFormat::CycloneDxJson),
    ("spdx-json", OutputFormat::SpdxJson),
    ("spdxjson", OutputFormat::SpdxJson),
    ("spdx-tag-value", OutputFormat::SpdxTagValue),
    ("spdxtagvalue", OutputFormat::SpdxTagValue),
    ("spdx", OutputFormat::SpdxTagValue),
    ("spdxtv", OutputFormat::SpdxTagValue),
];

impl OutputFormat {
    /// Resolves a single token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        FORMAT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, format)| *format)
    }

    /// Resolves a comma-separated token list in the order given
    ///
    /// Unknown tokens are skipped without error. Repeated tokens are kept,
    /// so the same format may appear more than once.
    pub fn parse_list(tokens: &str) -> Vec<Self> {
        tokens
            .split(',')
            .filter_map(|token| {
                let format = Self::from_token(token);
                if format.is_none() && !token.trim().is_empty() {
                    tracing::debug!(token = token.trim(), "ignoring unknown output format");
                }
                format
            })
            .collect()
    }

    /// Canonical token for this format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::CycloneDxXml => "cyclonedx-xml",
            OutputFormat::CycloneDxJson => "cyclonedx-json",
            OutputFormat::SpdxJson => "spdx-json",
            OutputFormat::SpdxTagValue => "spdx-tag-value",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::CycloneDxJson | OutputFormat::SpdxJson => "json",
            OutputFormat::CycloneDxXml => "xml",
            OutputFormat::SpdxTagValue => "spdx",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| {
            let accepted: Vec<&str> = FORMAT_ALIASES.iter().map(|(alias, _)| *alias).collect();
            format!(
                "Invalid format: {}. Accepted values: {}",
                s,
                accepted.join(", ")
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
