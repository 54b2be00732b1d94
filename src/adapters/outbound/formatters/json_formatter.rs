use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{Distro, Package};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Output<'a> {
    distro: Option<&'a Distro>,
    packages: &'a [Package],
}

/// JsonFormatter adapter for the native JSON document
///
/// Emits the distro and the canonical packages with the same field names
/// the scan report uses, so the output can be fed back as input.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let output = Output {
            distro: model.distro.as_ref(),
            packages: &model.packages,
        };

        serde_json::to_string_pretty(&output)
            .map_err(|e| SbomError::serialization("json", e).into())
    }
}
