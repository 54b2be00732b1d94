/// Formatter adapters for the supported output formats
mod cyclonedx_json_formatter;
mod cyclonedx_xml_formatter;
mod json_formatter;
mod spdx_json_formatter;
mod spdx_tag_value_formatter;

pub use cyclonedx_json_formatter::CycloneDxJsonFormatter;
pub use cyclonedx_xml_formatter::CycloneDxXmlFormatter;
pub use json_formatter::JsonFormatter;
pub use spdx_json_formatter::SpdxJsonFormatter;
pub use spdx_tag_value_formatter::SpdxTagValueFormatter;
