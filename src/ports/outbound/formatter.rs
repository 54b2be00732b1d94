use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for rendering the finalized inventory
///
/// One implementation exists per output format. Formatters only read the
/// model; the canonical package list is never mutated by a render.
pub trait SbomFormatter {
    /// Renders the read model into the target format
    ///
    /// # Arguments
    /// * `model` - Canonical packages, optional distro and document name
    ///
    /// # Returns
    /// The complete document text
    ///
    /// # Errors
    /// Returns `SbomError::SerializationError` if encoding fails; no partial
    /// document is returned in that case
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
