/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back
/// out, keeping the domain layer isolated from the inbound adapter.
mod dispatch_request;
mod output_format;
mod sbom_request;
mod sbom_response;

pub use dispatch_request::DispatchRequest;
pub use output_format::{OutputFormat, FORMAT_ALIASES};
pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
