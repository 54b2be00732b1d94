use crate::application::dto::{DispatchRequest, SbomResponse};
use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use crate::application::read_models::SbomReadModelBuilder;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// DispatchOutputsUseCase - Renders the canonical inventory in every
/// requested format and delivers each document
///
/// Formats are rendered in the order requested. The first render or write
/// failure stops dispatch. Scanner warnings are reported once all
/// documents have been delivered.
pub struct DispatchOutputsUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> DispatchOutputsUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the dispatch
    ///
    /// # Arguments
    /// * `response` - Finalized inventory to render
    /// * `request` - Resolved formats and destination
    ///
    /// # Returns
    /// Number of documents delivered
    ///
    /// # Errors
    /// Returns the first serialization or write error encountered
    pub fn execute(&self, response: &SbomResponse, request: &DispatchRequest) -> Result<usize> {
        let model = SbomReadModelBuilder::build(response);

        if request.formats.is_empty() {
            tracing::warn!("no recognised output format requested; nothing rendered");
        }

        for format in &request.formats {
            self.progress_reporter
                .report(FormatterFactory::progress_message(*format));

            let content = FormatterFactory::create(*format).format(&model)?;
            let destination = request.destination_for(*format);

            tracing::debug!(
                format = %format,
                bytes = content.len(),
                destination = ?destination,
                "rendered document"
            );

            PresenterFactory::create(PresenterType::from_destination(destination.clone()))
                .present(&content)?;

            if let Some(path) = destination {
                self.progress_reporter
                    .report(&format!("✅ Output complete: {}", path.display()));
            }
        }

        for warning in &response.warnings {
            self.progress_reporter
                .report_error(&format!("[warning]: {}", warning));
        }

        Ok(request.formats.len())
    }
}
