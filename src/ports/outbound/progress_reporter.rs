/// ProgressReporter port for user-facing progress on stderr
///
/// Diagnostics belong in `tracing`; this port only carries the short
/// status lines an operator watches while a report is finalized.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (spinner) labelled with `message`
    fn start_activity(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Ends the current activity, if any, and reports completion
    fn report_completion(&self, message: &str);
}
