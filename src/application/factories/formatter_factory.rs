use crate::adapters::outbound::formatters::{
    CycloneDxJsonFormatter, CycloneDxXmlFormatter, JsonFormatter, SpdxJsonFormatter,
    SpdxTagValueFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    ///
    /// # Returns
    /// A boxed SbomFormatter trait object appropriate for the specified format
    ///
    /// # Examples
    /// ```
    /// use diggity_bom::application::dto::OutputFormat;
    /// use diggity_bom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::SpdxJson);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::CycloneDxXml => Box::new(CycloneDxXmlFormatter::new()),
            OutputFormat::CycloneDxJson => Box::new(CycloneDxJsonFormatter::new()),
            OutputFormat::SpdxJson => Box::new(SpdxJsonFormatter::new()),
            OutputFormat::SpdxTagValue => Box::new(SpdxTagValueFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use diggity_bom::application::dto::OutputFormat;
    /// use diggity_bom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::CycloneDxXml);
    /// assert_eq!(message, "📝 Generating CycloneDX XML output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::CycloneDxXml => "📝 Generating CycloneDX XML output...",
            OutputFormat::CycloneDxJson => "📝 Generating CycloneDX JSON output...",
            OutputFormat::SpdxJson => "📝 Generating SPDX JSON output...",
            OutputFormat::SpdxTagValue => "📝 Generating SPDX tag-value output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SbomReadModel;

    #[test]
    fn test_create_every_formatter() {
        let model = SbomReadModel::default();

        for (_, format) in crate::application::dto::FORMAT_ALIASES {
            let formatter = FormatterFactory::create(*format);
            assert!(formatter.format(&model).is_ok(), "{} failed", format);
        }
    }

    #[test]
    fn test_create_cyclonedx_xml_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::CycloneDxXml);
        let output = formatter.format(&SbomReadModel::default()).unwrap();
        assert!(output.starts_with("<?xml"));
    }

    #[test]
    fn test_create_spdx_tag_value_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::SpdxTagValue);
        let output = formatter.format(&SbomReadModel::default()).unwrap();
        assert!(output.starts_with("SPDXVersion: SPDX-2.2\n"));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::SpdxJson),
            "📝 Generating SPDX JSON output..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON output..."
        );
    }
}
