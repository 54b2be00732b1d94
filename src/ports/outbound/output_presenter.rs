use crate::shared::Result;

/// OutputPresenter port for delivering a rendered document
///
/// This port abstracts the output destination (stdout, file).
pub trait OutputPresenter {
    /// Delivers the rendered document to the destination
    ///
    /// # Errors
    /// Write failures are returned unmodified; presenters never retry.
    fn present(&self, content: &str) -> Result<()>;
}
