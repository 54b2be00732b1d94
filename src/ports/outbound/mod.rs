/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, renderers).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_reader;

pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_reader::{ScanReader, ScanReport};
