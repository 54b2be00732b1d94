use super::OutputFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// DispatchRequest - Which documents to render and where to deliver them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    /// Formats in the order they were requested
    pub formats: Vec<OutputFormat>,
    /// Destination file; `None` prints to stdout
    pub destination: Option<PathBuf>,
}

impl DispatchRequest {
    pub fn new(formats: Vec<OutputFormat>, destination: Option<PathBuf>) -> Self {
        Self {
            formats,
            destination,
        }
    }

    /// Builds a request from the raw comma-separated token string
    pub fn from_tokens(tokens: &str, destination: Option<PathBuf>) -> Self {
        Self::new(OutputFormat::parse_list(tokens), destination)
    }

    /// Destination path for one format
    ///
    /// A single distinct format writes to the destination as given, even
    /// when its token was repeated. When several distinct formats share one
    /// destination, each gets `<stem>.<format>.<ext>` beside it.
    pub fn destination_for(&self, format: OutputFormat) -> Option<PathBuf> {
        let destination = self.destination.as_ref()?;
        if self.distinct_format_count() <= 1 {
            return Some(destination.clone());
        }

        let stem = destination
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bom".to_string());
        let file_name = format!("{}.{}.{}", stem, format.name(), format.file_extension());

        Some(
            destination
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(file_name),
        )
    }

    fn distinct_format_count(&self) -> usize {
        self.formats.iter().collect::<HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let request = DispatchRequest::from_tokens("spdx-json,unknown", None);
        assert_eq!(request.formats, vec![OutputFormat::SpdxJson]);
        assert!(request.destination.is_none());
    }

    #[test]
    fn test_destination_for_stdout() {
        let request = DispatchRequest::new(vec![OutputFormat::Json], None);
        assert_eq!(request.destination_for(OutputFormat::Json), None);
    }

    #[test]
    fn test_destination_for_single_format_is_verbatim() {
        let request = DispatchRequest::new(
            vec![OutputFormat::CycloneDxXml],
            Some(PathBuf::from("out/bom.txt")),
        );
        assert_eq!(
            request.destination_for(OutputFormat::CycloneDxXml),
            Some(PathBuf::from("out/bom.txt"))
        );
    }

    #[test]
    fn test_destination_for_multiple_formats_is_suffixed() {
        let request = DispatchRequest::new(
            vec![OutputFormat::CycloneDxXml, OutputFormat::SpdxTagValue],
            Some(PathBuf::from("out/bom.txt")),
        );
        assert_eq!(
            request.destination_for(OutputFormat::CycloneDxXml),
            Some(PathBuf::from("out/bom.cyclonedx-xml.xml"))
        );
        assert_eq!(
            request.destination_for(OutputFormat::SpdxTagValue),
            Some(PathBuf::from("out/bom.spdx-tag-value.spdx"))
        );
    }

    #[test]
    fn test_destination_for_bare_file_name() {
        let request = DispatchRequest::new(
            vec![OutputFormat::Json, OutputFormat::SpdxJson],
            Some(PathBuf::from("result.json")),
        );
        assert_eq!(
            request.destination_for(OutputFormat::SpdxJson),
            Some(PathBuf::from("result.spdx-json.json"))
        );
    }

    #[test]
    fn test_destination_for_repeated_format_is_verbatim() {
        let request =
            DispatchRequest::from_tokens("cyclone,CycloneDX", Some(PathBuf::from("out/bom.xml")));
        assert_eq!(request.formats.len(), 2);
        assert_eq!(
            request.destination_for(OutputFormat::CycloneDxXml),
            Some(PathBuf::from("out/bom.xml"))
        );
    }

    #[test]
    fn test_destination_for_repeats_do_not_hide_second_format() {
        let request =
            DispatchRequest::from_tokens("spdx,spdxtv,json", Some(PathBuf::from("out/bom.txt")));
        assert_eq!(
            request.destination_for(OutputFormat::Json),
            Some(PathBuf::from("out/bom.json.json"))
        );
    }
}
